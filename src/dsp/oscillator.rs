use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
    Square,
    Saw,
    Noise,
}

/// Phase-accumulating oscillator.
///
/// Phase is kept normalised to `[0, 1)`; one full cycle per `1 / frequency`
/// seconds. Noise ignores frequency and draws uniform samples in `[-1, 1)`.
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
    rng: Pcg32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Saw)
    }

    pub fn noise() -> Self {
        Self::new(OscillatorWaveform::Noise)
    }

    /// Noise with a fixed seed, for reproducible renders.
    pub fn seeded_noise(seed: u64) -> Self {
        Self {
            waveform: OscillatorWaveform::Noise,
            phase: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Produce one sample at `frequency` and advance the phase.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let p = self.phase;
        let value = match self.waveform {
            OscillatorWaveform::Sine => (TAU * p).sin(),
            // Peaks at 0.25 and troughs at 0.75, matching the sine's phase
            OscillatorWaveform::Triangle => 1.0 - 4.0 * (p - 0.25 - (p - 0.25 + 0.5).floor()).abs(),
            OscillatorWaveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            OscillatorWaveform::Saw => 2.0 * p - 1.0,
            OscillatorWaveform::Noise => self.rng.random_range(-1.0..1.0),
        };

        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();
        value
    }

    /// Fill `destination` at the context's frequency.
    pub fn render(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        for sample in destination.iter_mut() {
            *sample = self.next_sample(ctx.frequency, ctx.sample_rate);
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn triangle_follows_sine_phase() {
        let mut osc = OscillatorBlock::triangle();
        // 1 kHz at 48 kHz: a quarter cycle is 12 samples
        let samples: Vec<f32> = (0..48).map(|_| osc.next_sample(1_000.0, SAMPLE_RATE)).collect();

        assert!(samples[0].abs() < 1e-5, "starts at zero, got {}", samples[0]);
        assert!((samples[12] - 1.0).abs() < 1e-4, "peak at quarter cycle, got {}", samples[12]);
        assert!(samples[24].abs() < 1e-4, "zero crossing at half cycle, got {}", samples[24]);
        assert!((samples[36] + 1.0).abs() < 1e-4, "trough at three quarters, got {}", samples[36]);
    }

    #[test]
    fn noise_stays_in_range_and_varies() {
        let mut osc = OscillatorBlock::seeded_noise(7);
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 0.0);
        let mut buffer = vec![0.0f32; 256];
        osc.render(&mut buffer, &ctx);

        assert!(buffer.iter().all(|s| (-1.0..1.0).contains(s)));
        assert!(buffer.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let mut a = OscillatorBlock::seeded_noise(42);
        let mut b = OscillatorBlock::seeded_noise(42);
        for _ in 0..64 {
            assert_eq!(a.next_sample(0.0, SAMPLE_RATE), b.next_sample(0.0, SAMPLE_RATE));
        }
    }
}
