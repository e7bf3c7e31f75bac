//! Internal storage entries for the adjacency-vector base.

use super::Edge;

/// Out-record list of one live vertex slot. Every record in `out` has `source()` equal to
/// the slot's ordinal.
#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct VertexEntry {
    pub(in crate::graph) out: Vec<Edge>,
}
