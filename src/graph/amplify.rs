use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Multiply a signal by a modulator, sample by sample.
///
/// With an `EnvNode` as the modulator this is a VCA: the envelope shapes the
/// loudness, and the node stops being active as soon as either side has.
pub struct Amplify<N, M> {
    pub signal: N,
    pub modulator: M,
    temp_buffer: Vec<f32>,
}

impl<N, M> Amplify<N, M> {
    pub fn new(signal: N, modulator: M) -> Self {
        Self {
            signal,
            modulator,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N: GraphNode, M: GraphNode> GraphNode for Amplify<N, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Render signal into output
        self.signal.render_block(out, ctx);

        // Slice temp buffer to match output size (RT-safe, no allocation)
        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.modulator.render_block(frames, ctx);

        for (o, m) in out.iter_mut().zip(frames.iter()) {
            *o *= *m;
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.signal.note_on(ctx);
        self.modulator.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.modulator.is_active() && self.signal.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::envelope::Envelope;
    use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode};

    #[test]
    fn envelope_gates_the_oscillator() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0);
        let mut voice = OscNode::sine()
            .amplify(EnvNode::new(Envelope::from_level(0.5).exponential_to(0.01, 0.01)));
        voice.note_on(&ctx);

        let mut buffer = vec![0.0; 480];
        voice.render_block(&mut buffer, &ctx);
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak > 0.1 && peak <= 0.5, "peak={peak}");
        assert!(voice.is_active());

        voice.render_block(&mut buffer, &ctx);
        assert!(!voice.is_active());
        assert!(buffer.iter().all(|&s| s == 0.0));
    }
}
