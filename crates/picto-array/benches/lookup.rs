//! Criterion micro-benchmarks for the linear-search cost curve.
//!
//! The container scans unconditionally, so `get` and overwriting `set`
//! are both O(len). These benches document the curve at page-sized,
//! board-sized, and pathological populations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picto_array::AssocArray;

const SIZES: [usize; 3] = [16, 256, 4096];

fn populated(n: usize) -> AssocArray<String, usize> {
    let mut arr = AssocArray::new();
    for i in 0..n {
        arr.set(format!("img/item-{i}.png"), i).unwrap();
    }
    arr
}

fn bench_get_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_last_slot");
    for n in SIZES {
        let arr = populated(n);
        let probe = format!("img/item-{}.png", n - 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &arr, |b, arr| {
            b.iter(|| arr.get(black_box(probe.as_str())).unwrap());
        });
    }
    group.finish();
}

fn bench_get_missing(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_missing");
    for n in SIZES {
        let arr = populated(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &arr, |b, arr| {
            b.iter(|| arr.get(black_box("img/absent.png")).is_err());
        });
    }
    group.finish();
}

fn bench_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_overwrite");
    for n in SIZES {
        let probe = format!("img/item-{}.png", n / 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut arr = populated(n);
            b.iter(|| arr.set(black_box(probe.clone()), 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_last, bench_get_missing, bench_overwrite);
criterion_main!(benches);
