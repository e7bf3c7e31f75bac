//! Adjacency-vector graph containers.
//!
//! [`DiGraph`] is the directed base: a dense slot vector holding each vertex's outgoing
//! records. Removed vertex slots go onto a free-list and their ordinals are reused; edge
//! ordinals grow monotonically and are never reused. [`UnGraph`] composes over the base
//! (it wraps a `DiGraph` rather than exposing its mutators) and represents one logical
//! edge as two mirror records sharing a single ordinal.
//!
//! Structural queries live on the [`Graph`] trait so the algorithms in [`alg`] work with
//! either container. This is a single-threaded structure: mutating the graph invalidates
//! any sequence or labeling derived from it, and keeping them alive across mutations is a
//! caller error.

mod adj_cache;
mod entries;
mod handle;

pub mod alg;

pub use handle::{Edge, Handle, Vertex};

use crate::error::{Error, Result};
use adj_cache::InEdgeCache;
use entries::VertexEntry;
use std::cell::{Ref, RefCell};

/// Query capabilities shared by the graph containers.
///
/// The shortest-path algorithms are written against this trait — any representation that
/// can enumerate its vertices and out-records may be substituted for the built-in
/// containers.
pub trait Graph {
    /// Number of live vertices.
    fn order(&self) -> usize;

    /// Number of logical edges.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Exclusive upper bound on live vertex ordinals: the slot count, vacant slots
    /// included. Vertex labelings are sized to this, not to [`order`](Graph::order).
    fn vertex_bound(&self) -> usize;

    /// Exclusive upper bound on the edge ordinals issued so far.
    fn edge_bound(&self) -> usize;

    fn contains_vertex(&self, v: Vertex) -> bool;

    /// Whether some record connects `u` to `v`. O(out-degree of `u`).
    fn is_edge(&self, u: Vertex, v: Vertex) -> bool;

    /// Whether `e` is a live record of this graph. O(1).
    fn contains_edge(&self, e: Edge) -> bool;

    fn out_degree(&self, v: Vertex) -> usize;

    fn in_degree(&self, v: Vertex) -> usize;

    /// For directed graphs `out_degree + in_degree`; for undirected graphs all three
    /// degrees coincide.
    fn degree(&self, v: Vertex) -> usize;

    /// Live vertices in ascending ordinal order.
    fn vertices(&self) -> impl Iterator<Item = Vertex>;

    /// Records leaving `v`; every yielded record has `source() == v`. For undirected
    /// graphs this enumerates one record per incident logical edge (a self-loop yields
    /// both of its records).
    fn out_edges(&self, v: Vertex) -> impl Iterator<Item = Edge>;

    /// Records entering `v`. Coincides with [`out_edges`](Graph::out_edges) for
    /// undirected graphs.
    fn in_edges(&self, v: Vertex) -> impl Iterator<Item = Edge>;

    /// Records touching `v` in either direction.
    fn incident_edges(&self, v: Vertex) -> impl Iterator<Item = Edge>;
}

/// Directed graph backed by per-vertex out-record vectors.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    slots: Vec<Option<VertexEntry>>,
    free: Vec<u32>,
    live_edges: Vec<bool>,
    size: usize,

    // In-edge queries are answered from a lazily rebuilt cache; every structural
    // mutation bumps the generation, queries rebuild on mismatch.
    generation: u64,
    in_cache: RefCell<Option<InEdgeCache>>,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `order` vertices and no edges.
    pub fn with_order(order: usize) -> Self {
        let mut g = Self::new();
        for _ in 0..order {
            g.add_vertex();
        }
        g
    }

    fn invalidate_in_cache(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        *self.in_cache.get_mut() = None;
    }

    fn ensure_in_cache(&self) -> Ref<'_, InEdgeCache> {
        {
            let mut cache = self.in_cache.borrow_mut();
            let stale = cache
                .as_ref()
                .map(|c| c.generation != self.generation)
                .unwrap_or(true);
            if stale {
                *cache = Some(InEdgeCache::build(self.generation, &self.slots));
            }
        }
        Ref::map(self.in_cache.borrow(), |c| {
            c.as_ref().expect("in-edge cache should be present after ensure")
        })
    }

    fn entry(&self, v: Vertex) -> Option<&VertexEntry> {
        self.slots.get(v.index()).and_then(|s| s.as_ref())
    }

    fn alloc_ordinal(&mut self) -> u32 {
        let ordinal = self.live_edges.len();
        debug_assert!(ordinal < u32::MAX as usize, "edge ordinal overflow");
        self.live_edges.push(true);
        ordinal as u32
    }

    fn push_record(&mut self, e: Edge) {
        self.slots[e.source().index()]
            .as_mut()
            .expect("record source should be a live slot")
            .out
            .push(e);
    }

    fn take_record(&mut self, u: Vertex, v: Vertex) -> Option<Edge> {
        let entry = self.slots.get_mut(u.index())?.as_mut()?;
        let at = entry.out.iter().position(|e| e.target() == v)?;
        Some(entry.out.remove(at))
    }

    /// Append a new vertex with an empty out-list, reusing a free slot if one exists.
    pub fn add_vertex(&mut self) -> Vertex {
        self.invalidate_in_cache();
        if let Some(ix) = self.free.pop() {
            let slot = &mut self.slots[ix as usize];
            debug_assert!(slot.is_none(), "free-list entry points at a live slot");
            *slot = Some(VertexEntry::default());
            return Vertex::new(ix as usize);
        }
        let ix = self.slots.len();
        self.slots.push(Some(VertexEntry::default()));
        Vertex::new(ix)
    }

    /// Remove `v` and every record incident to it, in both directions.
    ///
    /// Precondition: `v` is live. The freed slot ordinal will be reused by a later
    /// [`add_vertex`](DiGraph::add_vertex).
    pub fn remove_vertex(&mut self, v: Vertex) {
        debug_assert!(self.contains_vertex(v), "remove_vertex requires a live vertex");
        let Some(entry) = self.slots.get_mut(v.index()).and_then(|s| s.take()) else {
            return;
        };
        self.invalidate_in_cache();

        for e in &entry.out {
            self.live_edges[e.index()] = false;
            self.size -= 1;
        }

        // Records targeting v live in the other slots.
        let mut removed = 0usize;
        let live_edges = &mut self.live_edges;
        for slot in self.slots.iter_mut().flatten() {
            slot.out.retain(|e| {
                if e.target() == v {
                    live_edges[e.index()] = false;
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        }
        self.size -= removed;
        self.free.push(v.index() as u32);
    }

    /// Append a directed record `u -> v` and return it.
    ///
    /// Precondition: both endpoints are live. Parallel edges are allowed; every call
    /// mints a fresh ordinal.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Edge {
        debug_assert!(
            self.contains_vertex(u) && self.contains_vertex(v),
            "add_edge endpoints must be live vertices"
        );
        self.invalidate_in_cache();
        let e = Edge::new(u, v, self.alloc_ordinal());
        self.push_record(e);
        self.size += 1;
        e
    }

    /// Remove the first record matching `u -> v`.
    ///
    /// Fails with [`Error::EdgeNotFound`] if the pair is not connected — including on the
    /// second of two calls for a singleton pair.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<Edge> {
        let Some(e) = self.take_record(u, v) else {
            return Err(Error::EdgeNotFound { from: u, to: v });
        };
        self.invalidate_in_cache();
        self.live_edges[e.index()] = false;
        self.size -= 1;
        Ok(e)
    }
}

impl Graph for DiGraph {
    fn order(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn vertex_bound(&self) -> usize {
        self.slots.len()
    }

    fn edge_bound(&self) -> usize {
        self.live_edges.len()
    }

    fn contains_vertex(&self, v: Vertex) -> bool {
        self.entry(v).is_some()
    }

    fn is_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.entry(u)
            .is_some_and(|entry| entry.out.iter().any(|e| e.target() == v))
    }

    fn contains_edge(&self, e: Edge) -> bool {
        !e.is_null() && self.live_edges.get(e.index()).copied().unwrap_or(false)
    }

    fn out_degree(&self, v: Vertex) -> usize {
        debug_assert!(self.contains_vertex(v), "out_degree requires a live vertex");
        self.entry(v).map_or(0, |entry| entry.out.len())
    }

    fn in_degree(&self, v: Vertex) -> usize {
        debug_assert!(self.contains_vertex(v), "in_degree requires a live vertex");
        if v.index() >= self.slots.len() {
            return 0;
        }
        self.ensure_in_cache().in_edges(v.index()).len()
    }

    fn degree(&self, v: Vertex) -> usize {
        self.out_degree(v) + self.in_degree(v)
    }

    fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(ix, slot)| slot.as_ref().map(|_| Vertex::new(ix)))
    }

    fn out_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        debug_assert!(self.contains_vertex(v), "out_edges requires a live vertex");
        self.entry(v)
            .map(|entry| entry.out.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn in_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        debug_assert!(self.contains_vertex(v), "in_edges requires a live vertex");
        let records: Vec<Edge> = if v.index() < self.slots.len() {
            self.ensure_in_cache().in_edges(v.index()).to_vec()
        } else {
            Vec::new()
        };
        records.into_iter()
    }

    fn incident_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        self.out_edges(v).chain(self.in_edges(v))
    }
}

/// Undirected graph composed over the directed base.
///
/// One logical edge is stored as two mirror records, one in each endpoint's out-list,
/// sharing a single ordinal — labelings therefore see one slot per logical edge. The
/// mutators below are the only way to change the structure, which keeps the mirror
/// invariant intact; the base's asymmetric mutators are not exposed.
#[derive(Debug, Clone, Default)]
pub struct UnGraph {
    base: DiGraph,
}

impl UnGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `order` vertices and no edges.
    pub fn with_order(order: usize) -> Self {
        Self {
            base: DiGraph::with_order(order),
        }
    }

    /// Append a new vertex with no incident edges.
    pub fn add_vertex(&mut self) -> Vertex {
        self.base.add_vertex()
    }

    /// Remove `v` and every logical edge incident to it.
    ///
    /// Precondition: `v` is live. Mirror records are located through their shared
    /// ordinal, so no global scan is needed.
    pub fn remove_vertex(&mut self, v: Vertex) {
        debug_assert!(
            self.base.contains_vertex(v),
            "remove_vertex requires a live vertex"
        );
        let Some(entry) = self.base.slots.get_mut(v.index()).and_then(|s| s.take()) else {
            return;
        };
        self.base.invalidate_in_cache();

        for e in &entry.out {
            // A self-loop has both records in v's own list; only its first sighting
            // counts.
            if !self.base.live_edges[e.index()] {
                continue;
            }
            self.base.live_edges[e.index()] = false;
            self.base.size -= 1;

            let partner = e.target();
            if partner != v {
                if let Some(p) = self
                    .base
                    .slots
                    .get_mut(partner.index())
                    .and_then(|s| s.as_mut())
                {
                    p.out.retain(|m| m.index() != e.index());
                }
            }
        }
        self.base.free.push(v.index() as u32);
    }

    /// Connect `u` and `v` with one logical edge; the returned record is the `u -> v`
    /// direction.
    ///
    /// Precondition: both endpoints are live. Parallel edges are allowed.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Edge {
        debug_assert!(
            self.base.contains_vertex(u) && self.base.contains_vertex(v),
            "add_edge endpoints must be live vertices"
        );
        self.base.invalidate_in_cache();
        let ordinal = self.base.alloc_ordinal();
        let e = Edge::new(u, v, ordinal);
        self.base.push_record(e);
        self.base.push_record(Edge::new(v, u, ordinal));
        self.base.size += 1;
        e
    }

    /// Remove the first logical edge connecting `u` and `v` (both records).
    ///
    /// Fails with [`Error::EdgeNotFound`] if the pair is not connected.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<Edge> {
        let Some(e) = self.base.take_record(u, v) else {
            return Err(Error::EdgeNotFound { from: u, to: v });
        };
        self.base.invalidate_in_cache();

        // The mirror shares the ordinal; for a self-loop it is the remaining record in
        // the same list.
        if let Some(p) = self.base.slots.get_mut(v.index()).and_then(|s| s.as_mut()) {
            if let Some(at) = p.out.iter().position(|m| m.index() == e.index()) {
                p.out.remove(at);
            }
        }
        self.base.live_edges[e.index()] = false;
        self.base.size -= 1;
        Ok(e)
    }
}

impl Graph for UnGraph {
    fn order(&self) -> usize {
        self.base.order()
    }

    fn size(&self) -> usize {
        self.base.size()
    }

    fn vertex_bound(&self) -> usize {
        self.base.vertex_bound()
    }

    fn edge_bound(&self) -> usize {
        self.base.edge_bound()
    }

    fn contains_vertex(&self, v: Vertex) -> bool {
        self.base.contains_vertex(v)
    }

    fn is_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.base.is_edge(u, v)
    }

    fn contains_edge(&self, e: Edge) -> bool {
        self.base.contains_edge(e)
    }

    fn out_degree(&self, v: Vertex) -> usize {
        self.base.out_degree(v)
    }

    fn in_degree(&self, v: Vertex) -> usize {
        self.base.out_degree(v)
    }

    fn degree(&self, v: Vertex) -> usize {
        self.base.out_degree(v)
    }

    fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.base.vertices()
    }

    fn out_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        self.base.out_edges(v)
    }

    fn in_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        self.base.out_edges(v)
    }

    fn incident_edges(&self, v: Vertex) -> impl Iterator<Item = Edge> {
        self.base.out_edges(v)
    }
}
