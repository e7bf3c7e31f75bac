use crate::graph::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no edge connects {from} -> {to}")]
    EdgeNotFound { from: Vertex, to: Vertex },

    #[error("labeling index {index} is out of range for size {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("weight queue is empty")]
    EmptyQueue,

    #[error("negative-weight cycle reachable from {from}")]
    NegativeCycle { from: Vertex },
}

pub type Result<T> = std::result::Result<T, Error>;
