//! Specifier dispatch table.
//!
//! Maps specifier bytes to conversion handlers. [`SpecTable::new`] carries
//! exactly the built-in conversions; callers may register their own handlers
//! (or override built-ins) for printable non-digit bytes and format through
//! the customized table with
//! [`vfctprintf_with`](crate::printf::vfctprintf_with). Formatting only ever
//! reads the table, so a shared `&SpecTable` may serve any number of
//! concurrent calls.

use crate::printf::{conv_char, conv_double, conv_pct, conv_ptr, conv_sint, conv_str, conv_uint};
use crate::state::FmtState;

/// A conversion handler: renders one directive from the parsed state.
///
/// A handler may pop zero or more arguments through `state.args` and may
/// recurse into the engine with `state.vprintf`.
pub type FmtSpecifier = fn(&mut FmtState);

const TABLE_LEN: usize = 0x7F;

/// Specifier-byte to handler mapping.
#[derive(Clone)]
pub struct SpecTable {
    entries: [Option<FmtSpecifier>; TABLE_LEN],
}

impl SpecTable {
    /// The built-in table used by [`vfctprintf`](crate::printf::vfctprintf).
    pub const DEFAULT: SpecTable = SpecTable::new();

    /// Build a table containing exactly the built-in conversions.
    pub const fn new() -> Self {
        let mut entries: [Option<FmtSpecifier>; TABLE_LEN] = [None; TABLE_LEN];

        entries[b'd' as usize] = Some(conv_sint as FmtSpecifier);
        entries[b'i' as usize] = Some(conv_sint as FmtSpecifier);

        entries[b'u' as usize] = Some(conv_uint as FmtSpecifier);
        entries[b'x' as usize] = Some(conv_uint as FmtSpecifier);
        entries[b'X' as usize] = Some(conv_uint as FmtSpecifier);
        entries[b'o' as usize] = Some(conv_uint as FmtSpecifier);
        entries[b'b' as usize] = Some(conv_uint as FmtSpecifier);

        entries[b'f' as usize] = Some(conv_double as FmtSpecifier);
        entries[b'F' as usize] = Some(conv_double as FmtSpecifier);
        #[cfg(any(feature = "exponential", not(feature = "float")))]
        {
            entries[b'e' as usize] = Some(conv_double as FmtSpecifier);
            entries[b'E' as usize] = Some(conv_double as FmtSpecifier);
            entries[b'g' as usize] = Some(conv_double as FmtSpecifier);
            entries[b'G' as usize] = Some(conv_double as FmtSpecifier);
        }

        entries[b'c' as usize] = Some(conv_char as FmtSpecifier);
        entries[b's' as usize] = Some(conv_str as FmtSpecifier);
        entries[b'p' as usize] = Some(conv_ptr as FmtSpecifier);
        entries[b'%' as usize] = Some(conv_pct as FmtSpecifier);

        SpecTable { entries }
    }

    /// Register `handler` for `%<specifier>`.
    ///
    /// The specifier must be printable non-digit ASCII; any other byte is a
    /// silent no-op. Built-in entries may be overridden. Registering a byte
    /// the parser already consumes (`0`-`9`, `-`, `+`, `#`, space, `.`, `*`,
    /// `l`, `h`, `t`, `j`, `z`) leaves the entry unreachable or shadowed in
    /// surprising ways; callers must avoid those bytes.
    pub fn install(&mut self, specifier: u8, handler: FmtSpecifier) {
        if specifier > b' ' && specifier <= b'~' && !specifier.is_ascii_digit() {
            self.entries[specifier as usize] = Some(handler);
        }
    }

    pub(crate) fn lookup(&self, specifier: u8) -> Option<FmtSpecifier> {
        if (specifier as usize) < TABLE_LEN {
            self.entries[specifier as usize]
        } else {
            None
        }
    }
}

impl Default for SpecTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_state: &mut FmtState) {}

    #[test]
    fn test_builtins_present() {
        let table = SpecTable::new();
        for spec in *b"diuxXobcsp%" {
            assert!(table.lookup(spec).is_some(), "missing builtin {}", spec as char);
        }
        assert!(table.lookup(b'q').is_none());
    }

    #[test]
    fn test_install_printable_non_digit() {
        let mut table = SpecTable::new();
        table.install(b'Q', noop);
        assert!(table.lookup(b'Q').is_some());
        table.install(b'~', noop);
        assert!(table.lookup(b'~').is_some());
        table.install(b'!', noop);
        assert!(table.lookup(b'!').is_some());
    }

    #[test]
    fn test_install_rejects_digits() {
        let mut table = SpecTable::new();
        table.install(b'5', noop);
        assert!(table.lookup(b'5').is_none());
    }

    #[test]
    fn test_install_rejects_space_and_controls() {
        let mut table = SpecTable::new();
        table.install(b' ', noop);
        assert!(table.lookup(b' ').is_none());
        table.install(0x07, noop);
        assert!(table.lookup(0x07).is_none());
        table.install(0x7F, noop);
        assert!(table.lookup(0x7F).is_none());
        table.install(0x80, noop);
        assert!(table.lookup(0x80).is_none());
    }

    #[test]
    fn test_install_overrides_builtin() {
        let mut table = SpecTable::new();
        table.install(b'd', noop);
        assert!(table.lookup(b'd').is_some());
    }

    #[test]
    fn test_lookup_never_indexes_past_ascii() {
        let table = SpecTable::new();
        assert!(table.lookup(0xFF).is_none());
        assert!(table.lookup(0x7F).is_none());
    }
}
