//! Benchmarks for the node combinators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use devilbox_audio::dsp::envelope::Envelope;
use devilbox_audio::graph::{
    envelope::EnvNode,
    extensions::NodeExt,
    filter::FilterNode,
    node::{GraphNode, RenderCtx},
    oscillator::OscNode,
};

use crate::BLOCK_SIZES;

pub fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/graph");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Oscillator × envelope
        let mut amplify = OscNode::sine().amplify(EnvNode::hold(0.5, 1_000.0));
        amplify.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("amplify", size), &size, |b, _| {
            b.iter(|| {
                amplify.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Two layers summed
        let mut mix = OscNode::sine().mix(OscNode::triangle().with_ratio(2.0));
        mix.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("mix", size), &size, |b, _| {
            b.iter(|| {
                mix.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Source into filter
        let mut through = OscNode::noise().through(FilterNode::highpass(4_000.0));
        through.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("through", size), &size, |b, _| {
            b.iter(|| {
                through.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Swept oscillator - extra envelope and powf per sample
        let mut sweep =
            OscNode::sine().with_sweep(Envelope::from_level(1.0).exponential_to(0.5, 1_000.0));
        sweep.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("sweep", size), &size, |b, _| {
            b.iter(|| {
                sweep.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
