use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Breakpoint Envelope
===================

This module implements an automation envelope: a level that moves through a
list of breakpoints over time. The same primitive shapes amplitude (attack,
plateau, decay) and pitch (kick drum sweeps, door "whoosh" glides).

Vocabulary
----------

  breakpoint  A (time, level) pair plus how the curve approaches it from the
              previous breakpoint. Times are seconds since note-on.

  approach    Step:        hold the previous level, then jump at `time`.
              Linear:      straight line from the previous breakpoint.
              Exponential: constant-ratio curve from the previous breakpoint.

  end         The time of the last breakpoint. After it the voice is over and
              the envelope outputs 0.0 (this is the note's stop time).


The Shape of a Typical Note
---------------------------

  Level
   peak ┐  ╱‾‾‾‾‾‾┐
        │ ╱       │
  plateau╱        └─╮
        │╱           ╲__
    0.0 └──────────────────╲→ Time
        attack  hold  step  exp decay → end

  Envelope::from_level(0.0)
      .linear_to(0.12, 0.01)        // attack
      .step_to(0.08, 0.2 * d)       // drop to the plateau
      .exponential_to(0.001, d)     // decay to near-silence exactly at d


The Math
--------

Between breakpoints a (t0, l0) and b (t1, l1), with progress
p = (t - t0) / (t1 - t0):

    linear:       l0 + (l1 - l0) * p
    exponential:  l0 * (l1 / l0) ^ p

Exponential ramps need both levels strictly positive. Levels are clamped to
MIN_EXP_LEVEL on the exponential path so a ramp "to zero" still decays.


State Machine
-------------

    ┌──────┐  note_on  ┌────────┐  t >= end  ┌──────────┐
    │ Idle │ ────────→ │ Active │ ─────────→ │ Finished │
    └──────┘           └────────┘            └──────────┘
        ↑                                         │
        └──────────────── note_on ────────────────┘ (retrigger)
*/

/// Smallest level an exponential ramp will start from or aim at.
pub const MIN_EXP_LEVEL: f32 = 1e-4;

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,     // Not yet triggered, outputs 0
    Active,   // Moving through breakpoints
    Finished, // Past the last breakpoint, outputs 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    Step,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    pub time: f32,
    pub level: f32,
    pub approach: Approach,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    points: Vec<Breakpoint>,

    // Runtime state
    stage: EnvelopeState,
    level: f32,
    elapsed_samples: u64,
    cursor: usize, // index of the breakpoint the curve is currently leaving
}

impl Envelope {
    /// Start an envelope holding `level` at time zero.
    pub fn from_level(level: f32) -> Self {
        Self {
            points: vec![Breakpoint {
                time: 0.0,
                level,
                approach: Approach::Step,
            }],
            stage: EnvelopeState::Idle,
            level: 0.0,
            elapsed_samples: 0,
            cursor: 0,
        }
    }

    fn push(mut self, level: f32, time: f32, approach: Approach) -> Self {
        // Breakpoints must be time-ordered; clamp late additions forward
        let last = self.points.last().map_or(0.0, |p| p.time);
        self.points.push(Breakpoint {
            time: time.max(last),
            level,
            approach,
        });
        self
    }

    /// Hold the previous level until `time`, then jump to `level`.
    pub fn step_to(self, level: f32, time: f32) -> Self {
        self.push(level, time, Approach::Step)
    }

    /// Ramp linearly from the previous breakpoint to `level` at `time`.
    pub fn linear_to(self, level: f32, time: f32) -> Self {
        self.push(level, time, Approach::Linear)
    }

    /// Ramp exponentially from the previous breakpoint to `level` at `time`.
    pub fn exponential_to(self, level: f32, time: f32) -> Self {
        self.push(level, time, Approach::Exponential)
    }

    /// Time of the final breakpoint, in seconds after note-on.
    pub fn end_time(&self) -> f32 {
        self.points.last().map_or(0.0, |p| p.time)
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Evaluate the curve at `t` seconds after note-on, ignoring runtime state.
    pub fn level_at(&self, t: f32) -> f32 {
        let idx = self.points.partition_point(|p| p.time <= t);
        Self::interpolate(&self.points, idx.saturating_sub(1), t)
    }

    fn interpolate(points: &[Breakpoint], cursor: usize, t: f32) -> f32 {
        let from = points[cursor];
        let Some(to) = points.get(cursor + 1) else {
            return from.level;
        };

        let span = (to.time - from.time).max(MIN_TIME);
        let progress = ((t - from.time) / span).clamp(0.0, 1.0);

        match to.approach {
            Approach::Step => from.level,
            Approach::Linear => from.level + (to.level - from.level) * progress,
            Approach::Exponential => {
                let start = from.level.max(MIN_EXP_LEVEL);
                let target = to.level.max(MIN_EXP_LEVEL);
                start * (target / start).powf(progress)
            }
        }
    }

    /// Restart from time zero.
    pub fn note_on(&mut self, _ctx: &RenderCtx) {
        self.stage = EnvelopeState::Active;
        self.elapsed_samples = 0;
        self.cursor = 0;
        self.level = self.points[0].level;
    }

    /// Advance the envelope by one sample. Called once per sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if self.stage != EnvelopeState::Active {
            self.level = 0.0;
            return 0.0;
        }

        let t = self.elapsed_samples as f32 / ctx.sample_rate;
        self.elapsed_samples += 1;

        if t >= self.end_time() {
            self.stage = EnvelopeState::Finished;
            self.level = 0.0;
            return 0.0;
        }

        while self.cursor + 1 < self.points.len() && self.points[self.cursor + 1].time <= t {
            self.cursor += 1;
        }

        self.level = Self::interpolate(&self.points, self.cursor, t);
        self.level
    }

    /// Render a block of envelope values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(ctx);
        }
    }

    /// Returns true until the final breakpoint has passed.
    pub fn is_active(&self) -> bool {
        self.stage == EnvelopeState::Active
    }

    /// Reset to idle state.
    pub fn reset(&mut self) {
        self.stage = EnvelopeState::Idle;
        self.level = 0.0;
        self.elapsed_samples = 0;
        self.cursor = 0;
    }

    /// Get the most recent output level
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}
