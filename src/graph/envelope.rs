use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// Graph node that renders a breakpoint envelope as a control signal.
///
/// Usually the modulator side of an `Amplify`, where it both shapes the
/// loudness of a voice and decides when the voice is over.
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    pub fn new(env: Envelope) -> Self {
        Self { env }
    }

    /// Constant `level` for `duration` seconds, then silence.
    pub fn hold(level: f32, duration: f32) -> Self {
        Self::new(Envelope::from_level(level).step_to(level, duration))
    }

    pub fn level(&self) -> f32 {
        self.env.level()
    }

    pub fn end_time(&self) -> f32 {
        self.env.end_time()
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.env.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}
