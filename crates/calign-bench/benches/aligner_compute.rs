// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use calign_bench::irregular_curve;
use calign_merge::{AlignerConfig, CurveAligner};
use criterion::{Criterion, criterion_group, criterion_main};

const CURVE_LEN: usize = 20_000;

fn benchmark_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("aligner_compute");

    for curve_count in [2usize, 8] {
        let mut aligner = CurveAligner::new(AlignerConfig::default());
        for seed in 0..curve_count as u64 {
            aligner.add(irregular_curve(CURVE_LEN, 0xabcd_0000 + seed, 100));
        }

        group.bench_function(format!("curves{curve_count}_len2e4"), |b| {
            b.iter(|| aligner.compute().valid_intervals().len())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compute);
criterion_main!(benches);
