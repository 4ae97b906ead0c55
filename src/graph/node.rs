/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch of the voice (Hz). Noise voices read it as a filter
///   cutoff or band centre instead.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
}

impl RenderCtx {
    /// Create context from a direct frequency
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes render audio block by block and are restarted by `note_on`. Every
/// voice in this crate is one-shot: it starts, runs through its envelopes and
/// stops on its own, so there is no note-off.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a voice starts
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Default: do nothing
    }

    /// Check if this node is still producing sound
    ///
    /// Used by the engine to know when a voice can be dropped.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
