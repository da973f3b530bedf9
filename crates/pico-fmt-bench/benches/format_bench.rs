//! Formatting engine benchmarks.
//!
//! Measures the directive parser and the numeric converters through the
//! public entry point, with a counting sink (engine cost only) and a
//! collector sink (engine + callback cost).

use criterion::{criterion_group, criterion_main, Criterion};
use pico_fmt_core::{vfctprintf, FmtArg};

fn bench_literal(c: &mut Criterion) {
    let format = &b"The quick brown fox jumps over the lazy dog"[..];
    c.bench_function("literal_passthrough", |b| {
        b.iter(|| criterion::black_box(vfctprintf(None, format, &[])));
    });
}

fn bench_integers(c: &mut Criterion) {
    let args = [
        FmtArg::Int(-123456),
        FmtArg::Uint(0xdead_beef),
        FmtArg::Uint(0o755),
        FmtArg::Uint(u64::MAX),
    ];
    c.bench_function("int_mixed_bases", |b| {
        b.iter(|| criterion::black_box(vfctprintf(None, b"%d %08x %#o %llu", &args)));
    });
}

fn bench_floats(c: &mut Criterion) {
    let args = [
        FmtArg::Float(3.14159265),
        FmtArg::Float(-12345.6789),
        FmtArg::Float(6.022e23),
    ];
    c.bench_function("float_fixed_and_exp", |b| {
        b.iter(|| criterion::black_box(vfctprintf(None, b"%f %10.3f %e", &args)));
    });
}

fn bench_collector_sink(c: &mut Criterion) {
    let args = [FmtArg::Str(b"collector"), FmtArg::Int(42)];
    c.bench_function("collector_sink", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64);
            let mut collect = |byte: u8| out.push(byte);
            let n = vfctprintf(Some(&mut collect), b"sink=%s n=%-6d", &args);
            criterion::black_box((n, out))
        });
    });
}

criterion_group!(
    benches,
    bench_literal,
    bench_integers,
    bench_floats,
    bench_collector_sink
);
criterion_main!(benches);
