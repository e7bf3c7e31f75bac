use selkie::{DiGraph, Error, Graph, label_edges, label_vertices};

#[test]
fn labelings_start_at_the_default_value() {
    let g = DiGraph::with_order(4);
    let labels = label_vertices(&g, 7u32);

    assert_eq!(labels.len(), 4);
    for v in g.vertices() {
        assert_eq!(labels[v], 7);
    }
    assert!(labels.values().all(|&x| x == 7));
}

#[test]
fn labeling_round_trips_written_values() {
    let mut g = DiGraph::with_order(3);
    let v: Vec<_> = g.vertices().collect();
    let e = g.add_edge(v[0], v[1]);

    let mut vertex_labels = label_vertices(&g, String::new());
    vertex_labels[v[2]] = "c".to_string();
    assert_eq!(vertex_labels[v[2]], "c");
    assert_eq!(vertex_labels[v[0]], "");

    let mut edge_labels = label_edges(&g, 0u64);
    edge_labels[e] = 42;
    assert_eq!(edge_labels[e], 42);
}

#[test]
fn stale_labelings_report_out_of_range_for_new_handles() {
    let mut g = DiGraph::with_order(2);
    let labels = label_vertices(&g, 0u8);

    let added = g.add_vertex();
    assert_eq!(
        labels.get(added),
        Err(Error::OutOfRange {
            index: added.index(),
            len: 2
        })
    );
}

#[test]
fn edge_labelings_are_sized_to_the_edge_bound() {
    let mut g = DiGraph::with_order(3);
    let v: Vec<_> = g.vertices().collect();
    g.add_edge(v[0], v[1]);
    g.add_edge(v[1], v[2]);

    assert_eq!(label_edges(&g, 0u8).len(), 2);

    // Ordinals are never reused, so the bound (and fresh labelings) keep their size
    // after a removal.
    g.remove_edge(v[0], v[1]).unwrap();
    assert_eq!(g.size(), 1);
    assert_eq!(label_edges(&g, 0u8).len(), 2);
}

#[test]
#[should_panic]
fn indexing_past_the_labeling_size_panics() {
    let mut g = DiGraph::with_order(1);
    let labels = label_vertices(&g, 0u8);
    let added = g.add_vertex();
    let _ = labels[added];
}
