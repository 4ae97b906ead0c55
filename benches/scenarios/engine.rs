//! Benchmarks for the engine mixing a dense passage.
//!
//! One bar of the fastest piece is scheduled up front (melody, bass,
//! harmony and percussion, plus a burst of collision blips), then the
//! engine renders it block by block as a device callback would.

use std::{hint::black_box, sync::Arc};

use criterion::{BatchSize, BenchmarkId, Criterion};
use devilbox_audio::{
    engine::{self, BusLevels},
    AudioFacility, Preferences, SoundSystem,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("bar_with_effects", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let (engine, handle) =
                        engine::channel(SAMPLE_RATE, Arc::new(BusLevels::default()));
                    let mut sound = SoundSystem::with_engine(handle, Preferences::default());
                    sound.activate_audio_facility();

                    let now = std::time::Instant::now();
                    sound.start_music(5, now);
                    for i in 0..8 {
                        let later = now + std::time::Duration::from_millis(60 * i);
                        sound.on_particle_collision(1.8, later);
                    }
                    (engine, sound, vec![0.0f32; size])
                },
                |(mut engine, sound, mut buffer)| {
                    // ~0.1 s of audio
                    for _ in 0..(4_800 / size) {
                        engine.render(black_box(&mut buffer));
                    }
                    black_box(sound.synthesizer().facility().map(|f| f.now()));
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
