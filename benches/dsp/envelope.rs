//! Benchmarks for the breakpoint envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use devilbox_audio::dsp::envelope::Envelope;
use devilbox_audio::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);

    // Segments are long enough that the benchmark never reaches the end
    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Linear attack
        let mut env = Envelope::from_level(0.0).linear_to(1.0, 1_000.0);
        env.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Exponential decay - powf per sample
        let mut env = Envelope::from_level(1.0).exponential_to(0.001, 1_000.0);
        env.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Plateau after a step
        let mut env = Envelope::from_level(0.0)
            .step_to(0.8, 0.0)
            .step_to(0.8, 1_000.0);
        env.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("hold", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
