//! Floating-point conversion.
//!
//! Fixed notation builds the digits in reverse in a bounded stack buffer and
//! hands the result to [`out_rev`]; there is no path on which the output can
//! grow with the value's magnitude (`%f` refuses magnitudes above
//! [`MAX_FLOAT`] upstream of this module). Exponential notation estimates
//! the decimal exponent from the IEEE-754 bit pattern — no math library is
//! available in a freestanding build — rescales the value into `[1, 10)`,
//! and reuses the fixed converter for the mantissa.

#[cfg(feature = "exponential")]
use crate::num::ntoa;
#[cfg(feature = "exponential")]
use crate::state::FmtFlags;
use crate::state::FmtState;

/// Fraction digits used when the directive carries no precision.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Largest magnitude `%f`/`%F` renders; beyond it the directive is refused
/// with a diagnostic rather than streaming hundreds of whole-number digits.
pub const MAX_FLOAT: f64 = 1e9;

/// Stack buffer for one fixed-notation conversion, including padding.
pub const FTOA_BUFFER_SIZE: usize = 32;

const POW10: [f64; 10] = [
    1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, 10000000.0, 100000000.0, 1000000000.0,
];

struct BufferFull;

/// Digit buffer filled least-significant first; emitted back to front.
struct RevBuf {
    buf: [u8; FTOA_BUFFER_SIZE],
    len: usize,
}

impl RevBuf {
    fn new() -> Self {
        Self {
            buf: [0; FTOA_BUFFER_SIZE],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) -> Result<(), BufferFull> {
        if self.len == FTOA_BUFFER_SIZE {
            return Err(BufferFull);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Drop the first `n` bytes — the rightmost characters of the rendered
    /// text.
    fn trim_front(&mut self, n: usize) {
        self.buf.copy_within(n..self.len, 0);
        self.len -= n;
    }
}

/// Emit a reversed buffer with width padding: leading spaces unless
/// left-justified or zero-padded, the buffer back to front, then trailing
/// spaces when left-justified.
fn out_rev(state: &mut FmtState, buf: &[u8]) {
    let start_idx = state.len();

    if !state.flags.left_justify && !state.flags.zero_pad {
        for _ in buf.len()..state.width {
            state.putchar(b' ');
        }
    }

    for &b in buf.iter().rev() {
        state.putchar(b);
    }

    if state.flags.left_justify {
        while state.len() - start_idx < state.width {
            state.putchar(b' ');
        }
    }
}

/// Render `nan` / `inf` forms. Returns true when `value` was special.
fn special(state: &mut FmtState, value: f64) -> bool {
    // the byte strings are stored reversed for out_rev
    if value.is_nan() {
        out_rev(state, b"nan");
        true
    } else if value < -f64::MAX {
        out_rev(state, b"fni-");
        true
    } else if value > f64::MAX {
        let buf: &[u8] = if state.flags.force_sign { b"fni+" } else { b"fni" };
        out_rev(state, buf);
        true
    } else {
        false
    }
}

/// Fixed-notation conversion (`%f`).
///
/// `strip_zeros` is the `%g` mode: trailing fractional zeros (and a bare
/// decimal point) are dropped unless the alternate form was requested.
pub(crate) fn ftoa(state: &mut FmtState, value: f64, strip_zeros: bool) {
    if special(state, value) {
        return;
    }
    match ftoa_buf(state, value, strip_zeros) {
        Ok(buf) => out_rev(state, buf.as_slice()),
        Err(BufferFull) => state.puts(b"%!(exceeded PICO_PRINTF_FTOA_BUFFER_SIZE)"),
    }
}

fn ftoa_buf(state: &mut FmtState, mut value: f64, strip_zeros: bool) -> Result<RevBuf, BufferFull> {
    let mut buf = RevBuf::new();

    let negative = value < 0.0;
    if negative {
        value = -value;
    }

    if !state.flags.precision_set {
        state.precision = DEFAULT_FLOAT_PRECISION;
    }
    // Fraction digits beyond the pow10 table render as filler zeros at the
    // far right; the computed fraction itself always stays within 10^9.
    while state.precision >= POW10.len() {
        buf.push(b'0')?;
        state.precision -= 1;
    }

    let mut whole = value as i64;
    let tmp = (value - whole as f64) * POW10[state.precision];
    let mut frac = tmp as u64;
    let diff = tmp - frac as f64;

    if diff > 0.5 {
        frac += 1;
        // rollover: 0.99 at precision 1 becomes 1.0
        if frac as f64 >= POW10[state.precision] {
            frac = 0;
            whole += 1;
        }
    } else if diff == 0.5 && (frac == 0 || frac & 1 == 1) {
        // exactly halfway: round up when the fraction is odd or zero
        frac += 1;
    }

    if state.precision == 0 {
        let diff = value - whole as f64;
        if diff == 0.5 && whole & 1 == 1 {
            // exactly .5 with an odd integer part: 1.5 -> 2, but 2.5 -> 2
            whole += 1;
        }
    } else {
        // fraction digits, least significant first
        let mut count = state.precision as isize;
        loop {
            count -= 1;
            buf.push(b'0' + (frac % 10) as u8)?;
            frac /= 10;
            if frac == 0 {
                break;
            }
        }
        while count > 0 {
            count -= 1;
            buf.push(b'0')?;
        }

        let stripping = strip_zeros && !state.flags.alt_form;
        if stripping {
            let zeros = buf
                .as_slice()
                .iter()
                .take_while(|&&b| b == b'0')
                .count();
            buf.trim_front(zeros);
        }
        if !(stripping && buf.len() == 0) {
            buf.push(b'.')?;
        }
    }

    // whole part, least significant first
    loop {
        buf.push(b'0' + (whole % 10) as u8)?;
        whole /= 10;
        if whole == 0 {
            break;
        }
    }

    // zero padding up to the field width, reserving the sign column
    if !state.flags.left_justify && state.flags.zero_pad {
        if state.width > 0
            && (negative || state.flags.force_sign || state.flags.space_sign)
        {
            state.width -= 1;
        }
        while buf.len() < state.width {
            buf.push(b'0')?;
        }
    }

    if negative {
        buf.push(b'-')?;
    } else if state.flags.force_sign {
        buf.push(b'+')?;
    } else if state.flags.space_sign {
        buf.push(b' ')?;
    }

    Ok(buf)
}

/// Exponential conversion (`%e`), with `adaptive` selecting `%g` semantics:
/// precision counts significant figures and near-unit magnitudes fall back
/// to fixed notation without an exponent suffix.
#[cfg(feature = "exponential")]
pub(crate) fn etoa(state: &mut FmtState, mut value: f64, adaptive: bool) {
    if special(state, value) {
        return;
    }

    let negative = value < 0.0;
    if negative {
        value = -value;
    }

    if !state.flags.precision_set {
        state.precision = DEFAULT_FLOAT_PRECISION;
    }

    // Decimal exponent from the bit pattern: log2 comes from the exponent
    // field, refined by an ln expansion around 1.5; 10^expval is then an
    // exp2 anchor times a continued-fraction exp(z) of the residual, with a
    // final compare-and-adjust for the off-by-one cases.
    let bits = value.to_bits();
    let is_zero = bits == 0;
    let mut expval: i32 = 0;
    let mut scale = 0.0f64; // 10^expval, meaningful only when !is_zero
    if !is_zero {
        let exp2 = ((bits >> 52) & 0x7FF) as i32 - 1023;
        let mantissa = f64::from_bits((bits & ((1u64 << 52) - 1)) | (1023u64 << 52)); // in [1, 2)
        expval = (0.1760912590558
            + f64::from(exp2) * 0.301029995663981
            + (mantissa - 1.5) * 0.289529654602168) as i32;
        let anchor = (f64::from(expval) * 3.321928094887362 + 0.5) as i32;
        let z = f64::from(expval) * 2.302585092994046 - f64::from(anchor) * 0.6931471805599453;
        let z2 = z * z;
        scale = f64::from_bits(((anchor + 1023) as u64) << 52)
            * (1.0 + 2.0 * z / (2.0 - z + (z2 / (6.0 + (z2 / (10.0 + z2 / 14.0))))));
        if value < scale {
            expval -= 1;
            scale /= 10.0;
        }
    }

    // the exponent renders as "e±NN"; three-digit exponents widen it by one
    let mut minwidth: usize = if expval < 100 && expval > -100 { 4 } else { 5 };

    if adaptive {
        if is_zero || (value >= 1e-4 && value < 1e6) {
            // fall back to fixed notation, rebasing the significant-figure
            // count to fraction digits
            state.precision = if state.precision as i32 > expval {
                (state.precision as i32 - expval - 1) as usize
            } else {
                0
            };
            state.flags.precision_set = true;
            minwidth = 0;
            expval = 0;
        } else if state.precision > 0 && state.flags.precision_set {
            // one significant figure becomes the integer part
            state.precision -= 1;
        }
    }

    // field width left over for the mantissa
    let mut fwidth = state.width;
    if fwidth > minwidth {
        fwidth -= minwidth;
    } else {
        fwidth = 0;
    }
    if state.flags.left_justify && minwidth > 0 {
        // right padding happens after the exponent, not inside the mantissa
        fwidth = 0;
    }

    if expval != 0 {
        value /= scale;
    }

    let start_idx = state.len();
    let orig_width = state.width;
    let left = state.flags.left_justify;
    let strip = adaptive && !state.flags.alt_form;

    state.width = fwidth;
    ftoa(state, if negative { -value } else { value }, strip);

    if minwidth > 0 {
        state.putchar(if state.specifier.is_ascii_uppercase() {
            b'E'
        } else {
            b'e'
        });
        // the exponent itself is a "%+0Nd"
        state.flags = FmtFlags {
            zero_pad: true,
            force_sign: true,
            ..FmtFlags::default()
        };
        state.width = minwidth - 1;
        state.precision = 0;
        ntoa(state, u64::from(expval.unsigned_abs()), expval < 0, 10);
        if left {
            while state.len() - start_idx < orig_width {
                state.putchar(b' ');
            }
        }
    }
}
