use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first (source)
into the second (effect): oscillator → filter.

How It Works:
-------------
1. Render the source into the output buffer
2. Pass that buffer through the effect (in-place processing)

Signal Flow Diagram:
--------------------
  Through: [Source] ──→ [Effect] ──→ output

  Amplify: [Signal] ──┬──→ (×) ──→ output
           [Mod]    ──┘

  Mix:     [A] ──────┬──→ (+) ──→ output
           [B] ──────┘

Only the source decides whether the chain is still sounding; a filter has no
notion of being "done".
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.filter.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }
}
