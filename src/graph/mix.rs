use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Signal Layering
========================

The Mix node sums two audio signals in parallel. It is the additive
counterpart to the Amplify node (which multiplies signals).

How it works:
1. Render source A into the output buffer
2. Render source B into a temporary buffer
3. output = A + B

There is no crossfade weight: each layer carries its own envelope, and the
envelope's levels already are the layer's gain. That is how the voices are
built:

  // Snare: a falling tone plus a short burst of high-passed noise
  let body = OscNode::sine().with_sweep(..).amplify(EnvNode::new(..));
  let rattle = OscNode::noise()
      .through(FilterNode::highpass(4000.0))
      .amplify(EnvNode::new(..));
  let snare = body.mix(rattle);

Both sources receive note_on. The node stays active while either layer is,
so a long tail on one layer keeps the whole voice alive.
*/

pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Mix {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Mix<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);

        self.source_b.render_block(frames, ctx);

        for (o, b) in out.iter_mut().zip(frames.iter()) {
            *o += *b;
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source_a.note_on(ctx);
        self.source_b.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.source_a.is_active() || self.source_b.is_active()
    }
}

#[cfg(test)]
mod tests {
    use crate::dsp::envelope::Envelope;
    use crate::graph::{
        envelope::EnvNode, extensions::NodeExt, node::GraphNode, node::RenderCtx,
        oscillator::OscNode,
    };

    #[test]
    fn layers_sum_sample_by_sample() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0);
        let mut single = OscNode::sine();
        let mut doubled = OscNode::sine().mix(OscNode::sine());

        let mut one = vec![0.0; 256];
        let mut two = vec![0.0; 256];
        single.render_block(&mut one, &ctx);
        doubled.render_block(&mut two, &ctx);

        for (a, b) in one.iter().zip(two.iter()) {
            assert!((2.0 * a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn stays_active_while_the_longer_layer_rings() {
        let ctx = RenderCtx::from_freq(1_000.0, 100.0);
        let short = OscNode::sine().amplify(EnvNode::hold(0.5, 0.01));
        let long = OscNode::sine().amplify(EnvNode::hold(0.5, 0.1));
        let mut voice = short.mix(long);
        voice.note_on(&ctx);

        let mut buffer = vec![0.0; 50];
        voice.render_block(&mut buffer, &ctx);
        assert!(voice.is_active(), "long layer still running");

        voice.render_block(&mut buffer, &ctx);
        voice.render_block(&mut buffer, &ctx);
        assert!(!voice.is_active());
    }

    #[test]
    fn output_is_bounded_by_layer_levels() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0);
        let env = || EnvNode::new(Envelope::from_level(0.3).exponential_to(0.01, 0.5));
        let mut voice = OscNode::sine().amplify(env()).mix(OscNode::triangle().amplify(env()));
        voice.note_on(&ctx);

        let mut buffer = vec![0.0; 1024];
        voice.render_block(&mut buffer, &ctx);
        assert!(buffer.iter().all(|&s| s.is_finite() && s.abs() <= 0.6 + 1e-5));
    }
}
