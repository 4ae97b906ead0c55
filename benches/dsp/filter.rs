//! Benchmarks for the state-variable filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use devilbox_audio::dsp::filter::SVFilter;
use devilbox_audio::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);

    let filters: [(&str, fn(f32) -> SVFilter, f32); 4] = [
        ("lowpass", SVFilter::lowpass, 600.0),     // bass
        ("highpass", SVFilter::highpass, 9_000.0), // hi-hat
        ("bandpass", SVFilter::bandpass, 3_000.0), // door hiss
        ("notch", SVFilter::notch, 1_000.0),
    ];

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        for (name, make, cutoff) in filters {
            let mut filter = make(cutoff);
            filter.set_q(1.0);
            let mut buffer = input.clone();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    filter.render(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
