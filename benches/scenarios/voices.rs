//! Benchmarks for complete voice chains.
//!
//! Each timbre is built exactly as the engine builds it, then rendered
//! from note-on. Durations are long so the voice never falls silent
//! mid-benchmark.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use devilbox_audio::{
    graph::node::{GraphNode, RenderCtx},
    synth::{NoteRequest, Timbre},
    voices, Bus,
};

use crate::BLOCK_SIZES;

const TIMBRES: [(&str, Timbre, f32); 9] = [
    ("melody", Timbre::Melody, 587.33),
    ("bass", Timbre::Bass, 98.0),
    ("harmony", Timbre::Harmony, 246.94),
    ("kick", Timbre::PercussionLow, voices::KICK_FREQUENCY),
    ("snare", Timbre::PercussionMid, voices::SNARE_FREQUENCY),
    ("hihat", Timbre::PercussionHiHat, voices::HIHAT_CUTOFF),
    (
        "blip",
        Timbre::Blip {
            glide: 0.7,
            glide_fraction: 1.0,
            floor: voices::BLIP_FLOOR,
        },
        1_500.0,
    ),
    ("noise_burst", Timbre::NoiseBurst, 3_000.0),
    ("chime", Timbre::Chime, 523.25),
];

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, timbre, frequency) in TIMBRES {
            let request = NoteRequest {
                timbre,
                frequency,
                start: 0.0,
                duration: 1_000.0,
                level: timbre.default_level(),
                bus: Bus::Music,
            };
            let ctx = RenderCtx::from_freq(48_000.0, frequency);
            let mut voice = voices::build(&request);
            voice.note_on(&ctx);

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    voice.render_block(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
