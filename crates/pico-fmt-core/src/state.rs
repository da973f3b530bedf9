//! Per-directive conversion state.
//!
//! One [`FmtState`] value carries the parsed directive fields, the argument
//! cursor, and the sink handle through a single conversion. The driver
//! builds a fresh value per directive; handlers receive `&mut FmtState` and
//! render entirely within the call (the borrows make retaining it
//! impossible). A handler may recurse into the engine through
//! [`FmtState::vprintf`], which shares the sink so the running count
//! continues across the nested call.

use crate::arg::{FmtArg, FmtArgs};
use crate::printf::format_loop;
use crate::sink::FmtSink;
use crate::table::SpecTable;

/// Flags parsed from a `%` directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FmtFlags {
    /// `'0'`: pad the field with zeros instead of spaces.
    pub zero_pad: bool,
    /// `'-'`: left-align within the field width.
    pub left_justify: bool,
    /// `'+'`: always show a sign on signed conversions.
    pub force_sign: bool,
    /// `' '`: blank before non-negative signed values.
    pub space_sign: bool,
    /// `'#'`: alternate form (base prefix).
    pub alt_form: bool,
    /// Set when a `'.'` was parsed; `precision` is only meaningful then.
    pub precision_set: bool,
}

/// Length modifier: which argument width the conversion reads.
///
/// `t`, `j` and `z` are remapped at parse time; on this 64-bit model they
/// all land on `Long`. The modifier is advisory — handlers decide what to
/// pop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FmtSize {
    /// `hh`
    Char,
    /// `h`
    Short,
    /// no modifier
    #[default]
    Default,
    /// `l` (also `t`, `j`, `z`)
    Long,
    /// `ll`
    LongLong,
}

/// State for one conversion.
///
/// The parsed fields are public so custom handlers can read (and, like the
/// built-in `%p`, rewrite) them before rendering.
pub struct FmtState<'a, 'b, 'c> {
    pub flags: FmtFlags,
    /// Minimum field width; 0 when unspecified.
    pub width: usize,
    /// Meaning depends on the specifier; valid only with
    /// `flags.precision_set`.
    pub precision: usize,
    pub size: FmtSize,
    /// The byte that selected this handler (`x` vs `X` decides hex case).
    pub specifier: u8,
    /// Argument cursor; advance it once per consumed argument.
    pub args: &'a mut FmtArgs<'b>,
    pub(crate) sink: &'a mut FmtSink<'c>,
    pub(crate) table: &'a SpecTable,
}

impl FmtState<'_, '_, '_> {
    /// Emit one byte.
    pub fn putchar(&mut self, byte: u8) {
        self.sink.put(byte);
    }

    /// Emit bytes up to (not including) the first NUL.
    pub fn puts(&mut self, s: &[u8]) {
        for &b in s {
            if b == 0 {
                break;
            }
            self.sink.put(b);
        }
    }

    /// Characters submitted since the start of the outermost call.
    ///
    /// Nested [`vprintf`](Self::vprintf) output is included: the count is a
    /// property of the sink, not of the directive.
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    /// Format `format` with `args` onto the current sink.
    ///
    /// Re-entrant: each nested directive gets its own fresh state; only the
    /// sink (and therefore the count) is shared with the outer call.
    pub fn vprintf(&mut self, format: &[u8], args: &[FmtArg<'_>]) {
        let mut cursor = FmtArgs::new(args);
        format_loop(&mut *self.sink, self.table, format, &mut cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puts_stops_at_nul() {
        let mut out = Vec::new();
        let mut collect = |b: u8| out.push(b);
        let mut sink = FmtSink::new(Some(&mut collect));
        let mut args = FmtArgs::new(&[]);
        let table = SpecTable::new();
        let mut state = FmtState {
            flags: FmtFlags::default(),
            width: 0,
            precision: 0,
            size: FmtSize::Default,
            specifier: b's',
            args: &mut args,
            sink: &mut sink,
            table: &table,
        };
        state.puts(b"abc\0def");
        assert_eq!(state.len(), 3);
        drop(state);
        drop(sink);
        assert_eq!(out, b"abc");
    }

    #[test]
    fn test_vprintf_shares_the_count() {
        let mut out = Vec::new();
        let mut collect = |b: u8| out.push(b);
        let mut sink = FmtSink::new(Some(&mut collect));
        let mut args = FmtArgs::new(&[]);
        let table = SpecTable::new();
        let mut state = FmtState {
            flags: FmtFlags::default(),
            width: 0,
            precision: 0,
            size: FmtSize::Default,
            specifier: b'Q',
            args: &mut args,
            sink: &mut sink,
            table: &table,
        };
        state.putchar(b'<');
        state.vprintf(b"%d", &[FmtArg::Int(42)]);
        state.putchar(b'>');
        assert_eq!(state.len(), 4);
        drop(state);
        drop(sink);
        assert_eq!(out, b"<42>");
    }
}
