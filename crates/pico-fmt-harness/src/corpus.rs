//! Curated conformance corpus.
//!
//! The authored reference cases: each pairs a format string and arguments
//! with the output the engine is specified to produce (C printf behavior
//! where applicable, engine extensions and diagnostics otherwise). The
//! `capture` CLI subcommand writes this corpus out as fixture JSON; `verify`
//! replays any fixture file against the engine.

use crate::fixtures::{FixtureArg, FixtureCase, FixtureSet};

fn case(name: &str, format: &str, args: Vec<FixtureArg>, expected: &str, section: &str) -> FixtureCase {
    FixtureCase {
        name: name.into(),
        format: format.into(),
        args,
        expected_output: expected.into(),
        spec_section: section.into(),
    }
}

/// The built-in reference corpus.
pub fn builtin_corpus() -> FixtureSet {
    use FixtureArg::{Char, Float, Int, Ptr, Str, Uint};

    let cases = vec![
        // literals
        case("literal_passthrough", "hello world", vec![], "hello world", "ISO C11 7.21.6.1p3"),
        case("percent_escape", "100%%", vec![], "100%", "ISO C11 7.21.6.1 %"),
        // signed integers
        case("decimal_basic", "%d", vec![Int(42)], "42", "ISO C11 7.21.6.1 d"),
        case("decimal_negative", "%d", vec![Int(-123)], "-123", "ISO C11 7.21.6.1 d"),
        case("decimal_width", "%6d", vec![Int(42)], "    42", "ISO C11 7.21.6.1 width"),
        case("decimal_width_zero_value", "%4d", vec![Int(0)], "   0", "ISO C11 7.21.6.1 width"),
        case("decimal_left_justify", "%-6d|", vec![Int(42)], "42    |", "ISO C11 7.21.6.1 -"),
        case("decimal_zero_pad_negative", "%06d", vec![Int(-42)], "-00042", "ISO C11 7.21.6.1 0"),
        case("decimal_precision", "%.4d", vec![Int(7)], "0007", "ISO C11 7.21.6.1 precision"),
        case("decimal_sign_flags", "%+d % d", vec![Int(5), Int(5)], "+5  5", "ISO C11 7.21.6.1 +"),
        case("short_truncates", "%hd", vec![Int(65537)], "1", "ISO C11 7.21.6.1 h"),
        case("char_width_truncates", "%hhd", vec![Int(-129)], "127", "ISO C11 7.21.6.1 hh"),
        case("long_long_max", "%llu", vec![Uint(u64::MAX)], "18446744073709551615", "ISO C11 7.21.6.1 ll"),
        // unsigned bases
        case("hex_lower_upper", "%x %X", vec![Uint(0xbeef), Uint(0xbeef)], "beef BEEF", "ISO C11 7.21.6.1 x"),
        case("hex_zero_pad", "%08x", vec![Uint(0xabc)], "00000abc", "ISO C11 7.21.6.1 x"),
        case("octal", "%o", vec![Uint(8)], "10", "ISO C11 7.21.6.1 o"),
        case("binary", "%b", vec![Uint(5)], "101", "engine extension b"),
        case(
            "alternate_forms",
            "%#b %#o %#x %#X",
            vec![Uint(5), Uint(8), Uint(255), Uint(255)],
            "0b101 010 0xff 0XFF",
            "ISO C11 7.21.6.1 #",
        ),
        // strings and chars
        case(
            "string_and_int",
            "Hello %s, you are %d years old",
            vec![Str("Ada".into()), Int(37)],
            "Hello Ada, you are 37 years old",
            "ISO C11 7.21.6.1 s",
        ),
        case(
            "string_padding_mirror",
            "%-10s|%10s",
            vec![Str("hi".into()), Str("hi".into())],
            "hi        |        hi",
            "ISO C11 7.21.6.1 -",
        ),
        case("string_precision", "%.3s", vec![Str("hello".into())], "hel", "ISO C11 7.21.6.1 s precision"),
        case("string_width_precision", "%5.2s", vec![Str("hello".into())], "   he", "ISO C11 7.21.6.1 s"),
        case("char_basic", "%c", vec![Char(b'A')], "A", "ISO C11 7.21.6.1 c"),
        case("char_width", "%3c", vec![Char(b'A')], "  A", "ISO C11 7.21.6.1 c"),
        case(
            "pointer_full_width",
            "%p",
            vec![Ptr(0xdead)],
            "000000000000DEAD",
            "engine %p as zero-padded %X",
        ),
        // fixed floats
        case("float_default_precision", "%f", vec![Float(3.14159)], "3.141590", "ISO C11 7.21.6.1 f"),
        case("float_signed_rounding", "%+.3f", vec![Float(3.14159)], "+3.142", "ISO C11 7.21.6.1 f"),
        case(
            "float_halves_to_even",
            "%.0f %.0f %.0f",
            vec![Float(1.5), Float(2.5), Float(3.5)],
            "2 2 4",
            "round-half-to-even",
        ),
        case("float_width", "%10.3f", vec![Float(-3.14159)], "    -3.142", "ISO C11 7.21.6.1 f"),
        case("float_zero_pad_sign", "%09.2f", vec![Float(-1.5)], "-00001.50", "ISO C11 7.21.6.1 0"),
        case("float_space_flag", "% .0f", vec![Float(0.5)], " 0", "ISO C11 7.21.6.1 space"),
        // exponential and adaptive floats
        case("exp_basic", "%e", vec![Float(1234.5678)], "1.234568e+03", "ISO C11 7.21.6.1 e"),
        case("exp_small", "%.2e", vec![Float(0.00314)], "3.14e-03", "ISO C11 7.21.6.1 e"),
        case("exp_zero", "%e", vec![Float(0.0)], "0.000000e+00", "ISO C11 7.21.6.1 e"),
        case(
            "adaptive_by_magnitude",
            "%g %g %g",
            vec![Float(0.0001), Float(1.0), Float(1e7)],
            "0.0001 1 1e+07",
            "ISO C11 7.21.6.1 g",
        ),
        case("adaptive_plain", "%g", vec![Float(1.5)], "1.5", "ISO C11 7.21.6.1 g"),
        case("adaptive_tiny", "%g", vec![Float(0.00001)], "1e-05", "ISO C11 7.21.6.1 g"),
        // dynamic width/precision
        case("star_width", "%*d", vec![Int(5), Int(42)], "   42", "ISO C11 7.21.6.1 *"),
        case("star_precision", "%.*f", vec![Int(2), Float(3.14159)], "3.14", "ISO C11 7.21.6.1 *"),
        // embedded diagnostics
        case(
            "unknown_specifier",
            "%q",
            vec![],
            "%!(unknown specifier='q')",
            "engine diagnostic",
        ),
        case(
            "max_float_refusal",
            "%f",
            vec![Float(1e10)],
            "%!(exceeded PICO_PRINTF_MAX_FLOAT)",
            "engine diagnostic",
        ),
    ];

    FixtureSet {
        version: "v1".into(),
        family: "printf/format-engine".into(),
        cases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_nonempty_and_named_uniquely() {
        let set = builtin_corpus();
        assert!(set.cases.len() >= 30);
        let mut names: Vec<_> = set.cases.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), set.cases.len());
    }
}
