use crate::graph::{amplify::Amplify, mix::Mix, node::GraphNode, through::Through};

pub trait NodeExt: GraphNode + Sized {
    fn amplify<M>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }

    fn through<F: GraphNode>(self, filter: F) -> Through<Self, F> {
        Through::new(self, filter)
    }

    fn mix<M: GraphNode>(self, source: M) -> Mix<Self, M> {
        Mix::new(self, source)
    }

    /// Erase the concrete node type so voices of different shapes can share a queue.
    fn boxed(self) -> Box<dyn GraphNode>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: GraphNode> NodeExt for T {}
