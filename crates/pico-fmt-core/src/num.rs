//! Integer conversion.
//!
//! Streams one integer directive straight to the sink, most significant
//! digit first, with the framing emitted in field order: leading spaces,
//! sign or base prefix, leading zeros, digits, trailing spaces. A single
//! `u64` magnitude covers every argument width; callers truncate the popped
//! value to the directive's length modifier before widening.

use crate::state::FmtState;

/// Render an unsigned magnitude in `base`; `negative` selects the `-` sign
/// for base-10 output.
///
/// Framing rules:
/// - a zero value still renders one `0` digit, unless an explicit precision
///   of zero suppresses all digits (the framing is still emitted);
/// - an explicit precision disables the `0` flag and pads digits to the
///   precision instead;
/// - the alternate form adds `0b` / `0` / `0x` for bases 2 / 8 / 16 on
///   non-zero values, with hex case taken from the specifier byte;
/// - sign characters only exist in base 10.
pub(crate) fn ntoa(state: &mut FmtState, absval: u64, negative: bool, base: u64) {
    let start_idx = state.len();

    let suppressed = absval == 0 && state.flags.precision_set && state.precision == 0;
    let mut ndigits: usize = 0;
    let mut div: u64 = 1;
    if absval != 0 {
        ndigits = 1;
        while absval / div >= base {
            div *= base;
            ndigits += 1;
        }
    } else if !suppressed {
        ndigits = 1;
    }

    // columns taken by the sign or the base prefix
    let nextra: usize = match base {
        2 | 16 if state.flags.alt_form && absval != 0 => 2,
        8 if state.flags.alt_form && absval != 0 => 1,
        10 if negative || state.flags.force_sign || state.flags.space_sign => 1,
        _ => 0,
    };

    // precision wins over the '0' flag
    if state.flags.precision_set {
        state.flags.zero_pad = false;
    }

    // leading spaces
    if state.width > 0 && !state.flags.left_justify && !state.flags.zero_pad {
        for _ in state.precision.max(ndigits) + nextra..state.width {
            state.putchar(b' ');
        }
    }

    // base prefix or sign
    match base {
        2 if state.flags.alt_form && absval != 0 => {
            state.putchar(b'0');
            state.putchar(b'b');
        }
        8 if state.flags.alt_form && absval != 0 => {
            state.putchar(b'0');
        }
        16 if state.flags.alt_form && absval != 0 => {
            state.putchar(b'0');
            state.putchar(state.specifier);
        }
        10 => {
            if negative {
                state.putchar(b'-');
            } else if state.flags.force_sign {
                state.putchar(b'+');
            } else if state.flags.space_sign {
                state.putchar(b' ');
            }
        }
        _ => {}
    }

    // leading zeros
    if state.flags.precision_set {
        for _ in ndigits..state.precision {
            state.putchar(b'0');
        }
    } else if state.width > 0 && !state.flags.left_justify && state.flags.zero_pad {
        for _ in ndigits + nextra..state.width {
            state.putchar(b'0');
        }
    }

    // digits, most significant first
    let mut rem = absval;
    for _ in 0..ndigits {
        let digit = (rem / div) as u8;
        rem %= div;
        div /= base;
        let c = if digit < 10 {
            b'0' + digit
        } else {
            let alpha = if state.specifier.is_ascii_uppercase() {
                b'A'
            } else {
                b'a'
            };
            alpha + digit - 10
        };
        state.putchar(c);
    }

    // trailing spaces
    for _ in state.len() - start_idx..state.width {
        state.putchar(b' ');
    }
}
