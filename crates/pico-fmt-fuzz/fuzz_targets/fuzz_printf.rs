#![no_main]
use libfuzzer_sys::fuzz_target;
use pico_fmt_core::{vfctprintf, FmtArg};

// Arbitrary bytes as a format string against a fixed argument set: the
// engine must never panic, and the counting sink must agree byte-for-byte
// with a collecting sink.
fuzz_target!(|data: &[u8]| {
    // width/precision padding streams through the sink, so "%999999999d" is
    // legal output of enormous length; keep the corpus off that path
    if data.windows(5).any(|w| w.iter().all(u8::is_ascii_digit)) {
        return;
    }

    let args = [
        FmtArg::Int(-42),
        FmtArg::Uint(0xdead_beef),
        FmtArg::Float(3.25),
        FmtArg::Str(b"fuzz\0tail"),
        FmtArg::Char(b'x'),
        FmtArg::Ptr(0x1000),
        FmtArg::Float(-0.0),
        FmtArg::Int(i64::MIN),
    ];

    let counted = vfctprintf(None, data, &args);

    let mut out = Vec::new();
    let mut collect = |b: u8| out.push(b);
    let emitted = vfctprintf(Some(&mut collect), data, &args);

    assert_eq!(counted, emitted);
    assert_eq!(emitted, out.len());
});
