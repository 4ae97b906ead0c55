use crate::{
    dsp::filter::SVFilter,
    graph::node::{GraphNode, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

A filter removes or attenuates certain frequencies from a signal. The voices
here use it in three ways:

Lowpass (LP): Passes frequencies BELOW the cutoff.
  - Rounds off the triangle bass so it sits under the melody

Highpass (HP): Passes frequencies ABOVE the cutoff.
  - Turns white noise into snare rattle and hi-hat hiss

Bandpass (BP): Passes frequencies AROUND the cutoff.
  - The airy "whoosh" of a door opening

Parameters:
-----------

Cutoff (Hz): The frequency where the filter takes effect. Either fixed at
construction or, with `tracking()`, read from the note frequency so a noise
voice can be "pitched" by its request.

Q: Emphasis at the cutoff frequency.
  - 0.5:  Critically damped (default)
  - 0.707: Butterworth, flattest passband
  - 1.0+: A peak forms at the cutoff

Example usage:
  let bass = OscNode::triangle()
      .through(FilterNode::lowpass(600.0).with_q(1.0));

  let hiss = OscNode::noise()
      .through(FilterNode::highpass(0.0).tracking());
*/

pub struct FilterNode {
    filter: SVFilter,
    track_note: bool,
}

impl FilterNode {
    fn new(filter: SVFilter) -> Self {
        Self {
            filter,
            track_note: false,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::lowpass(cutoff_hz))
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::highpass(cutoff_hz))
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::bandpass(cutoff_hz))
    }

    pub fn notch(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::notch(cutoff_hz))
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.filter.set_q(q);
        self
    }

    /// Use the note frequency from the render context as the cutoff.
    pub fn tracking(mut self) -> Self {
        self.track_note = true;
        self
    }

    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff_hz
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.track_note {
            self.filter.set_cutoff(ctx.frequency);
        }
        self.filter.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.filter.reset();
        if self.track_note {
            self.filter.set_cutoff(ctx.frequency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_filter_takes_cutoff_from_note() {
        let mut filter = FilterNode::highpass(100.0).tracking();
        filter.note_on(&RenderCtx::from_freq(48_000.0, 9_000.0));
        assert_eq!(filter.cutoff(), 9_000.0);
    }

    #[test]
    fn fixed_filter_keeps_its_cutoff() {
        let mut filter = FilterNode::lowpass(600.0).with_q(1.0);
        let mut buffer = vec![0.5; 32];
        filter.render_block(&mut buffer, &RenderCtx::from_freq(48_000.0, 2_000.0));
        assert_eq!(filter.cutoff(), 600.0);
    }
}
