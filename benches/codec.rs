//! 短码编解码性能基准测试

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sharelink::codec::{ShareCodec, decode, encode, slugify};

const SHARE_ID: &str = "project_0b9e2f1a-1111-2222-3333-444455556666_20240115_093000_aabbccdd-5555-6666-7777-888899990000";
// 载荷中带 `-`，走定宽切分
const HYPHEN_ID: &str = "proposal_fbef0000-0000-0000-0000-000000000000_20231231_235959_00000000-0000-0000-0000-0000000000fb";

// ============== encode 基准测试 ==============

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/encode");

    group.bench_function("valid", |b| {
        b.iter(|| {
            assert!(encode(black_box(SHARE_ID)).is_some());
        });
    });

    let upper = SHARE_ID.to_uppercase();
    group.bench_function("valid_uppercase", |b| {
        b.iter(|| {
            assert!(encode(black_box(&upper)).is_some());
        });
    });

    group.bench_function("invalid_entity", |b| {
        b.iter(|| {
            assert!(encode(black_box("invoice_a_b_c_d")).is_none());
        });
    });

    let codec = ShareCodec::new();
    group.bench_function("codec_instance", |b| {
        b.iter(|| {
            assert!(codec.encode(black_box(SHARE_ID)).is_some());
        });
    });

    group.finish();
}

// ============== decode 基准测试 ==============

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/decode");

    for (name, id) in [("plain", SHARE_ID), ("hyphen_payload", HYPHEN_ID)] {
        let code = encode(id).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("valid", name), &code, |b, code| {
            b.iter(|| {
                assert!(decode(black_box(code)).is_some());
            });
        });
    }

    group.bench_function("invalid_garbage", |b| {
        b.iter(|| {
            assert!(decode(black_box("x-!!!-###-$$$")).is_none());
        });
    });

    group.finish();
}

// ============== slugify 基准测试 ==============

fn bench_slugify(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/slugify");

    for len in [16, 64, 512] {
        let title = "Q3 Report: Revenue & Growth!! ".repeat(len / 16 + 1);
        let title = &title[..len];
        group.bench_with_input(BenchmarkId::new("title_len", len), &title, |b, title| {
            b.iter(|| {
                let slug = slugify(black_box(title));
                assert!(slug.len() <= 60);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_slugify);
criterion_main!(benches);
