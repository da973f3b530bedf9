//! Format-string driver and built-in conversion handlers.
//!
//! The driver walks the format byte-by-byte: literal bytes stream through;
//! `%` enters the directive machine (flags, width, precision, length
//! modifier, specifier) and dispatches through the specifier table. An
//! unknown specifier renders an inline `%!(unknown specifier='…')`
//! diagnostic and parsing continues with the next byte.

use crate::arg::{FmtArg, FmtArgs};
#[cfg(feature = "float")]
use crate::float::ftoa;
#[cfg(feature = "exponential")]
use crate::float::etoa;
#[cfg(feature = "float")]
use crate::float::MAX_FLOAT;
use crate::num::ntoa;
use crate::sink::FmtSink;
use crate::state::{FmtFlags, FmtSize, FmtState};
use crate::table::SpecTable;

/// Format `format` with `args`, streaming bytes to `out`.
///
/// Returns the number of characters submitted. Passing `None` for `out`
/// counts without emitting and returns the same value a real sink would
/// have seen. The caller's argument slice is read through a fresh cursor,
/// never consumed.
pub fn vfctprintf(out: Option<&mut dyn FnMut(u8)>, format: &[u8], args: &[FmtArg<'_>]) -> usize {
    vfctprintf_with(&SpecTable::DEFAULT, out, format, args)
}

/// [`vfctprintf`] against an explicit specifier table.
pub fn vfctprintf_with(
    table: &SpecTable,
    out: Option<&mut dyn FnMut(u8)>,
    format: &[u8],
    args: &[FmtArg<'_>],
) -> usize {
    let mut sink = FmtSink::new(out);
    let mut cursor = FmtArgs::new(args);
    format_loop(&mut sink, table, format, &mut cursor);
    sink.len()
}

/// One pass over a format string. Shared by the entry points and by
/// [`FmtState::vprintf`] recursion.
pub(crate) fn format_loop(
    sink: &mut FmtSink<'_>,
    table: &SpecTable,
    format: &[u8],
    args: &mut FmtArgs<'_>,
) {
    let mut i = 0;
    while i < format.len() {
        // literal byte?
        if format[i] != b'%' {
            sink.put(format[i]);
            i += 1;
            continue;
        }
        i += 1;

        // flags
        let mut flags = FmtFlags::default();
        while i < format.len() {
            match format[i] {
                b'0' => flags.zero_pad = true,
                b'-' => flags.left_justify = true,
                b'+' => flags.force_sign = true,
                b' ' => flags.space_sign = true,
                b'#' => flags.alt_form = true,
                _ => break,
            }
            i += 1;
        }

        // width
        let mut width = 0usize;
        if i < format.len() && format[i].is_ascii_digit() {
            width = parse_decimal(format, &mut i);
        } else if i < format.len() && format[i] == b'*' {
            let w = args.pop_int();
            if w < 0 {
                // negative dynamic width means left-aligned
                flags.left_justify = true;
                width = w.unsigned_abs() as usize;
            } else {
                width = w as usize;
            }
            i += 1;
        }

        // precision
        let mut precision = 0usize;
        if i < format.len() && format[i] == b'.' {
            flags.precision_set = true;
            i += 1;
            if i < format.len() && format[i].is_ascii_digit() {
                precision = parse_decimal(format, &mut i);
            } else if i < format.len() && format[i] == b'*' {
                let p = args.pop_int();
                precision = if p > 0 { p as usize } else { 0 };
                i += 1;
            }
        }

        // length modifier; j/z/t all name 64-bit types on this model
        let mut size = FmtSize::Default;
        if i < format.len() {
            match format[i] {
                b'l' => {
                    size = FmtSize::Long;
                    i += 1;
                    if i < format.len() && format[i] == b'l' {
                        size = if cfg!(feature = "long-long") {
                            FmtSize::LongLong
                        } else {
                            FmtSize::Long
                        };
                        i += 1;
                    }
                }
                b'h' => {
                    size = FmtSize::Short;
                    i += 1;
                    if i < format.len() && format[i] == b'h' {
                        size = FmtSize::Char;
                        i += 1;
                    }
                }
                #[cfg(feature = "ptrdiff")]
                b't' => {
                    size = FmtSize::Long;
                    i += 1;
                }
                b'j' => {
                    size = FmtSize::Long;
                    i += 1;
                }
                b'z' => {
                    size = FmtSize::Long;
                    i += 1;
                }
                _ => {}
            }
        }

        // specifier; a format ending in '%' dispatches the NUL it would
        // have read in C, which lands in the diagnostic path below
        let specifier = if i < format.len() { format[i] } else { 0 };
        i += 1;

        match table.lookup(specifier) {
            Some(handler) => {
                let mut state = FmtState {
                    flags,
                    width,
                    precision,
                    size,
                    specifier,
                    args: &mut *args,
                    sink: &mut *sink,
                    table,
                };
                handler(&mut state);
            }
            None => {
                for &b in b"%!(unknown specifier=" {
                    sink.put(b);
                }
                put_quoted_byte(sink, specifier);
                sink.put(b')');
            }
        }
    }
}

fn parse_decimal(format: &[u8], i: &mut usize) -> usize {
    let mut value = 0usize;
    while *i < format.len() && format[*i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((format[*i] - b'0') as usize);
        *i += 1;
    }
    value
}

/// Emit a byte as `'c'` (backslash-escaping `'` and `\`) or as `'\xHH'` for
/// non-printable values.
fn put_quoted_byte(sink: &mut FmtSink<'_>, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    sink.put(b'\'');
    if (b' '..=b'~').contains(&byte) {
        if byte == b'\'' || byte == b'\\' {
            sink.put(b'\\');
        }
        sink.put(byte);
    } else {
        sink.put(b'\\');
        sink.put(b'x');
        sink.put(HEX[(byte >> 4) as usize]);
        sink.put(HEX[(byte & 0xF) as usize]);
    }
    sink.put(b'\'');
}

// ---------------------------------------------------------------------------
// Built-in handlers
// ---------------------------------------------------------------------------

/// `%d` / `%i`: signed decimal.
pub(crate) fn conv_sint(state: &mut FmtState) {
    // the length modifier selects how much of the popped value is read
    let value = match state.size {
        FmtSize::Char => i64::from(state.args.pop_int() as i8),
        FmtSize::Short => i64::from(state.args.pop_int() as i16),
        FmtSize::Default => i64::from(state.args.pop_int() as i32),
        FmtSize::Long | FmtSize::LongLong => state.args.pop_int(),
    };
    ntoa(state, value.unsigned_abs(), value < 0, 10);
}

/// `%u` / `%x` / `%X` / `%o` / `%b`: unsigned in the specifier's base.
pub(crate) fn conv_uint(state: &mut FmtState) {
    let base: u64 = match state.specifier {
        b'x' | b'X' => 16,
        b'o' => 8,
        b'b' => 2,
        _ => {
            // '%u' never carries sign decoration
            state.flags.force_sign = false;
            state.flags.space_sign = false;
            10
        }
    };
    let value = match state.size {
        FmtSize::Char => u64::from(state.args.pop_uint() as u8),
        FmtSize::Short => u64::from(state.args.pop_uint() as u16),
        FmtSize::Default => u64::from(state.args.pop_uint() as u32),
        FmtSize::Long | FmtSize::LongLong => state.args.pop_uint(),
    };
    ntoa(state, value, false, base);
}

/// `%f`/`%F`/`%e`/`%E`/`%g`/`%G`: floating point.
#[cfg(feature = "float")]
pub(crate) fn conv_double(state: &mut FmtState) {
    let value = state.args.pop_float();
    match state.specifier {
        b'f' | b'F' => {
            // standard printf prints EVERY whole-number digit, which for a
            // huge double means hundreds of characters; refuse instead
            if (value > MAX_FLOAT && value < f64::MAX)
                || (value < -MAX_FLOAT && value > -f64::MAX)
            {
                state.puts(b"%!(exceeded PICO_PRINTF_MAX_FLOAT)");
                return;
            }
            ftoa(state, value, false);
        }
        #[cfg(feature = "exponential")]
        b'e' | b'E' => etoa(state, value, false),
        #[cfg(feature = "exponential")]
        b'g' | b'G' => etoa(state, value, true),
        _ => {}
    }
}

/// Float support compiled out: consume the argument, mark the output.
#[cfg(not(feature = "float"))]
pub(crate) fn conv_double(state: &mut FmtState) {
    let _ = state.args.pop_float();
    state.puts(b"??");
}

/// `%c`: one byte, space-padded to the field width.
pub(crate) fn conv_char(state: &mut FmtState) {
    let c = state.args.pop_char();
    let mut l = 1usize;
    if !state.flags.left_justify {
        while l < state.width {
            l += 1;
            state.putchar(b' ');
        }
    }
    state.putchar(c);
    if state.flags.left_justify {
        while l < state.width {
            l += 1;
            state.putchar(b' ');
        }
    }
}

/// `%s`: bytes up to the NUL, capped by the precision.
pub(crate) fn conv_str(state: &mut FmtState) {
    let s = state.args.pop_str();
    let cap = if state.flags.precision_set {
        state.precision
    } else {
        usize::MAX
    };
    let l = strnlen(s, cap);

    if !state.flags.left_justify {
        let mut pad = l;
        while pad < state.width {
            pad += 1;
            state.putchar(b' ');
        }
    }
    for &b in &s[..l] {
        state.putchar(b);
    }
    if state.flags.left_justify {
        let mut pad = l;
        while pad < state.width {
            pad += 1;
            state.putchar(b' ');
        }
    }
}

/// `%p`: the pointer bits as a full-width zero-padded `%X`.
pub(crate) fn conv_ptr(state: &mut FmtState) {
    state.width = core::mem::size_of::<usize>() * 2;
    state.flags.zero_pad = true;
    state.specifier = b'X';
    let value = state.args.pop_ptr() as u64;
    ntoa(state, value, false, 16);
}

/// `%%`: a literal percent sign.
pub(crate) fn conv_pct(state: &mut FmtState) {
    state.putchar(b'%');
}

/// Length of `s` up to the first NUL, bounded by `max`.
fn strnlen(s: &[u8], max: usize) -> usize {
    let bound = max.min(s.len());
    s.iter()
        .take(bound)
        .position(|&b| b == 0)
        .unwrap_or(bound)
}
