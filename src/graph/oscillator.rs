use crate::dsp::{envelope::Envelope, oscillator::OscillatorBlock};
use crate::graph::node::{GraphNode, RenderCtx};

/*
Audio Oscillator
================

An oscillator is the sound source of every voice. It generates a repeating
waveform at a frequency (pitch); envelopes and filters shape it afterwards.

Waveform Types and Their Character:
-----------------------------------

Sine: The purest tone - a single frequency with no harmonics.
  - Sound: Smooth, hollow, flute-like
  - Use: Melody lines, harmony pads, drum bodies, UI blips

Triangle: Mellow and soft - weak odd harmonics (falling off as 1/n²).
  - Sound: Soft, between sine and square
  - Use: Bass lines, a faint octave shimmer above the melody

Square / Sawtooth: Bright, harmonically rich.
  - Available for completeness; the game's timbres stay soft.

Noise: Random samples - no pitch.
  - Sound: Hiss, static, breath
  - Use: Snare rattle, hi-hats, the air of a sliding door

Where the Pitch Comes From:
---------------------------

  default        ctx.frequency          (the note being played)
  with_ratio(r)  ctx.frequency * r      (an overtone that follows the note)
  with_frequency fixed Hz               (ignores the note entirely)

On top of that, `with_sweep(env)` multiplies the pitch by an automation
envelope every sample. Drums and effects use it for their falling or rising
pitch:

  // Kick: 80 Hz body dropping to 50 Hz over 80 ms
  OscNode::sine().with_sweep(
      Envelope::from_level(1.0).exponential_to(50.0 / 80.0, 0.08),
  )

Once the sweep has passed its last breakpoint the oscillator holds the final
ratio; the amplitude envelope decides when the voice is over.
*/

#[derive(Debug, Clone, Copy)]
enum PitchSource {
    FollowNote,
    Ratio(f32),
    Fixed(f32),
}

pub struct OscNode {
    osc: OscillatorBlock,
    pitch: PitchSource,
    sweep: Option<Envelope>,
    /// Ratio held after the sweep envelope has finished
    sweep_hold: f32,
}

impl OscNode {
    fn new(osc: OscillatorBlock) -> Self {
        Self {
            osc,
            pitch: PitchSource::FollowNote,
            sweep: None,
            sweep_hold: 1.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorBlock::sine())
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorBlock::sawtooth())
    }

    pub fn square() -> Self {
        Self::new(OscillatorBlock::square())
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorBlock::triangle())
    }

    pub fn noise() -> Self {
        Self::new(OscillatorBlock::noise())
    }

    /// Set a fixed frequency, ignoring the note pitch from RenderCtx.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.pitch = PitchSource::Fixed(freq);
        self
    }

    /// Track the note pitch at a fixed ratio (2.0 = one octave up).
    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.pitch = PitchSource::Ratio(ratio);
        self
    }

    /// Multiply the pitch by `sweep` while it runs, then hold its last level.
    pub fn with_sweep(mut self, sweep: Envelope) -> Self {
        self.sweep_hold = sweep.breakpoints().last().map_or(1.0, |p| p.level);
        self.sweep = Some(sweep);
        self
    }

    #[inline]
    fn base_frequency(&self, ctx: &RenderCtx) -> f32 {
        match self.pitch {
            PitchSource::FollowNote => ctx.frequency,
            PitchSource::Ratio(ratio) => ctx.frequency * ratio,
            PitchSource::Fixed(freq) => freq,
        }
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let base = self.base_frequency(ctx);

        match self.sweep.as_mut() {
            None => {
                let modified_ctx = RenderCtx {
                    frequency: base,
                    ..*ctx
                };
                self.osc.render(out, &modified_ctx);
            }
            Some(sweep) => {
                for sample in out.iter_mut() {
                    let ratio = if sweep.is_active() {
                        let r = sweep.next_sample(ctx);
                        if sweep.is_active() {
                            r
                        } else {
                            self.sweep_hold
                        }
                    } else {
                        self.sweep_hold
                    };
                    *sample = self.osc.next_sample(base * ratio, ctx.sample_rate);
                }
            }
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.osc.reset();
        if let Some(sweep) = self.sweep.as_mut() {
            sweep.note_on(ctx);
        }
    }
}
