//! Single-source shortest paths over [`Graph`](super::Graph) containers.
//!
//! Both algorithms allocate their distance and predecessor labelings per invocation and
//! return them together as a [`ShortestPaths`]. Unreachable vertices are a normal
//! outcome, encoded as a sentinel distance and a null predecessor; a negative-weight
//! cycle is not, and makes [`bellman_ford`] fail instead of returning a labeling.

use super::{Edge, Graph, Vertex};
use crate::error::{Error, Result};
use crate::labeling::{EdgeLabeling, VertexLabeling, label_vertices};
use crate::queue::WeightQueue;
use num_traits::{Bounded, Zero};

/// Weight values the shortest-path algorithms can accumulate.
///
/// `max_value` doubles as the "infinite distance" sentinel, so weights must keep it
/// unreachable by legitimate path sums. Blanket-implemented for every numeric type with
/// the required bounds.
pub trait Weight: Copy + PartialOrd + Zero + Bounded {}

impl<W> Weight for W where W: Copy + PartialOrd + Zero + Bounded {}

/// Result of a single-source run: the predecessor and distance labelings.
///
/// Following predecessors from a reachable vertex traces one shortest path back to the
/// source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: Vertex,
    dist: VertexLabeling<W>,
    pred: VertexLabeling<Vertex>,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Shortest distance from the source, `None` if `v` is unreachable.
    pub fn distance(&self, v: Vertex) -> Option<W> {
        let d = self.dist[v];
        (d != W::max_value()).then_some(d)
    }

    /// Predecessor of `v` on one shortest path; `None` for the source itself and for
    /// unreachable vertices.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        let p = self.pred[v];
        (!p.is_null()).then_some(p)
    }

    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.dist[v] != W::max_value()
    }

    /// Vertices of one shortest source-to-`v` path, both endpoints included. `None` if
    /// `v` is unreachable.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut cur = v;
        while cur != self.source {
            cur = self.pred[cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    pub fn distances(&self) -> &VertexLabeling<W> {
        &self.dist
    }

    pub fn predecessors(&self) -> &VertexLabeling<Vertex> {
        &self.pred
    }

    pub fn into_predecessors(self) -> VertexLabeling<Vertex> {
        self.pred
    }
}

/// Dijkstra single-source shortest paths for non-negative weights.
///
/// The "queue everything first" variant: every vertex is pushed up front keyed by its
/// tentative distance, and the loop stops early once the minimum key is the infinity
/// sentinel — everything still queued is unreachable, which is a normal outcome, not an
/// error. A negative weight is a precondition violation, checked in debug builds only.
/// O((V + E) log V).
pub fn dijkstra<G, W, F>(g: &G, source: Vertex, mut weight: F) -> Result<ShortestPaths<W>>
where
    G: Graph,
    W: Weight,
    F: FnMut(Edge) -> W,
{
    debug_assert!(
        g.contains_vertex(source),
        "dijkstra source must be a live vertex"
    );
    tracing::debug!(order = g.order(), size = g.size(), "dijkstra");

    let mut dist: VertexLabeling<W> = label_vertices(g, W::max_value());
    let mut pred: VertexLabeling<Vertex> = label_vertices(g, Vertex::NULL);
    dist[source] = W::zero();

    let mut queue = WeightQueue::for_graph(g);
    for v in g.vertices() {
        queue.push(v, dist[v]);
    }

    while !queue.is_empty() {
        let u = queue.top()?;
        let du = dist[u];
        if du == W::max_value() {
            break;
        }
        for e in g.out_edges(u) {
            let v = e.opposite(u);
            let candidate = du + weight(e);
            debug_assert!(
                candidate >= du,
                "dijkstra requires non-negative edge weights"
            );
            if candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = u;
                queue.decrease(v, candidate);
            }
        }
        queue.pop()?;
    }

    Ok(ShortestPaths { source, dist, pred })
}

/// [`dijkstra`] reading weights from an edge labeling (one slot per logical edge).
pub fn dijkstra_labeled<G, W>(
    g: &G,
    source: Vertex,
    weights: &EdgeLabeling<W>,
) -> Result<ShortestPaths<W>>
where
    G: Graph,
    W: Weight,
{
    dijkstra(g, source, |e| weights[e])
}

/// Bellman-Ford single-source shortest paths; negative weights allowed.
///
/// Runs `order - 1` relaxation passes (stopping early once a pass changes nothing),
/// skipping vertices whose tentative distance is still the sentinel so nothing is ever
/// added to "infinity". A final verification pass reports [`Error::NegativeCycle`] if any
/// edge can still relax: no finite shortest-path labeling exists then. O(V · E).
pub fn bellman_ford<G, W, F>(g: &G, source: Vertex, mut weight: F) -> Result<ShortestPaths<W>>
where
    G: Graph,
    W: Weight,
    F: FnMut(Edge) -> W,
{
    debug_assert!(
        g.contains_vertex(source),
        "bellman_ford source must be a live vertex"
    );
    tracing::debug!(order = g.order(), size = g.size(), "bellman-ford");

    let mut dist: VertexLabeling<W> = label_vertices(g, W::max_value());
    let mut pred: VertexLabeling<Vertex> = label_vertices(g, Vertex::NULL);
    dist[source] = W::zero();

    for _ in 1..g.order() {
        let mut changed = false;
        for u in g.vertices() {
            let du = dist[u];
            if du == W::max_value() {
                continue;
            }
            for e in g.out_edges(u) {
                let v = e.opposite(u);
                let candidate = du + weight(e);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    pred[v] = u;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    for u in g.vertices() {
        let du = dist[u];
        if du == W::max_value() {
            continue;
        }
        for e in g.out_edges(u) {
            if du + weight(e) < dist[e.opposite(u)] {
                tracing::debug!(%source, "negative-weight cycle detected");
                return Err(Error::NegativeCycle { from: source });
            }
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}

/// [`bellman_ford`] reading weights from an edge labeling.
pub fn bellman_ford_labeled<G, W>(
    g: &G,
    source: Vertex,
    weights: &EdgeLabeling<W>,
) -> Result<ShortestPaths<W>>
where
    G: Graph,
    W: Weight,
{
    bellman_ford(g, source, |e| weights[e])
}
