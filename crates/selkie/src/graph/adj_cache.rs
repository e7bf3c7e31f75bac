//! Lazily rebuilt in-edge cache for [`DiGraph`](super::DiGraph).
//!
//! The cache exists purely as an optimization: in-edge and in-degree queries would
//! otherwise scan every out-list, O(V + E) per call. It is rebuilt on first use after a
//! structural mutation, tracked by a generation counter.

use super::Edge;
use super::entries::VertexEntry;

#[derive(Debug, Clone)]
pub(in crate::graph) struct InEdgeCache {
    pub(in crate::graph) generation: u64,
    offsets: Vec<usize>,
    records: Vec<Edge>,
}

impl InEdgeCache {
    pub(in crate::graph) fn build(generation: u64, slots: &[Option<VertexEntry>]) -> Self {
        let mut counts = vec![0usize; slots.len()];
        for entry in slots.iter().flatten() {
            for e in &entry.out {
                counts[e.target().index()] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(slots.len() + 1);
        let mut total = 0usize;
        offsets.push(0);
        for c in &counts {
            total += c;
            offsets.push(total);
        }

        let mut cursor: Vec<usize> = offsets[..slots.len()].to_vec();
        let mut records = vec![Edge::NULL; total];
        for entry in slots.iter().flatten() {
            for &e in &entry.out {
                let t = e.target().index();
                records[cursor[t]] = e;
                cursor[t] += 1;
            }
        }

        Self {
            generation,
            offsets,
            records,
        }
    }

    pub(in crate::graph) fn in_edges(&self, v_ix: usize) -> &[Edge] {
        let start = self.offsets[v_ix];
        let end = self.offsets[v_ix + 1];
        &self.records[start..end]
    }
}
