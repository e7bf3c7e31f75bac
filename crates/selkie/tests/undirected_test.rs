use selkie::{Graph, UnGraph, Vertex, label_edges};

fn graph_with(order: usize) -> (UnGraph, Vec<Vertex>) {
    let g = UnGraph::with_order(order);
    let v = g.vertices().collect();
    (g, v)
}

#[test]
fn undirected_edges_are_symmetric() {
    let (mut g, v) = graph_with(2);
    g.add_edge(v[1], v[0]);

    assert!(g.is_edge(v[0], v[1]));
    assert!(g.is_edge(v[1], v[0]));
    assert_eq!(g.size(), 1);
}

#[test]
fn undirected_degrees_coincide_by_construction() {
    let (mut g, v) = graph_with(3);
    g.add_edge(v[0], v[1]);
    g.add_edge(v[1], v[2]);

    for &u in &v {
        assert_eq!(g.degree(u), g.out_degree(u));
        assert_eq!(g.degree(u), g.in_degree(u));
    }
    assert_eq!(g.degree(v[1]), 2);
}

#[test]
fn undirected_mirror_records_share_one_label_slot() {
    let (mut g, v) = graph_with(2);
    let e = g.add_edge(v[0], v[1]);

    let mut labels = label_edges(&g, 0);
    labels[e] = 7;

    let mirror = g.out_edges(v[1]).next().unwrap();
    assert_eq!(mirror.source(), v[1]);
    assert_eq!(mirror.target(), v[0]);
    assert_eq!(labels[mirror], 7);
    assert_eq!(labels.len(), 1);
}

#[test]
fn undirected_remove_edge_removes_both_records() {
    let (mut g, v) = graph_with(2);
    let e = g.add_edge(v[0], v[1]);

    g.remove_edge(v[1], v[0]).unwrap();

    assert!(!g.is_edge(v[0], v[1]));
    assert!(!g.is_edge(v[1], v[0]));
    assert!(!g.contains_edge(e));
    assert_eq!(g.size(), 0);
    assert_eq!(g.degree(v[0]), 0);
    assert_eq!(g.degree(v[1]), 0);
}

#[test]
fn undirected_remove_vertex_removes_mirror_records() {
    let (mut g, v) = graph_with(3);
    g.add_edge(v[0], v[1]);
    g.add_edge(v[1], v[2]);

    g.remove_vertex(v[1]);

    assert_eq!(g.order(), 2);
    assert_eq!(g.size(), 0);
    assert_eq!(g.degree(v[0]), 0);
    assert_eq!(g.degree(v[2]), 0);
}

#[test]
fn undirected_self_loop_contributes_two_records() {
    let (mut g, v) = graph_with(1);
    g.add_edge(v[0], v[0]);

    assert_eq!(g.size(), 1);
    assert_eq!(g.degree(v[0]), 2);
    assert_eq!(g.out_edges(v[0]).count(), 2);

    g.remove_edge(v[0], v[0]).unwrap();
    assert_eq!(g.size(), 0);
    assert_eq!(g.degree(v[0]), 0);
}
