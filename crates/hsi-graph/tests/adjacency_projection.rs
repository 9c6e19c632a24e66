use hsi_core::errors::HsiError;
use hsi_core::NodeId;
use hsi_graph::{AdjacencyMatrix, HyperedgeList};

fn node(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

fn four_cycle() -> HyperedgeList {
    HyperedgeList::new(
        4,
        2,
        vec![
            vec![node(0), node(1)],
            vec![node(1), node(2)],
            vec![node(2), node(3)],
            vec![node(3), node(0)],
        ],
    )
    .unwrap()
}

#[test]
fn pairwise_projection_preserves_structure() {
    let matrix = AdjacencyMatrix::from_hyperedges(&four_cycle()).unwrap();

    assert_eq!(matrix.num_nodes(), 4);
    for raw in 0..4u64 {
        assert_eq!(matrix.degree(node(raw)), 2);
        assert!(!matrix.is_adjacent(node(raw), node(raw)));
    }
    assert!(matrix.is_adjacent(node(0), node(1)));
    assert!(matrix.is_adjacent(node(1), node(0)));
    assert!(!matrix.is_adjacent(node(0), node(2)));

    let neighbors: Vec<u64> = matrix.neighbors(node(0)).map(|id| id.as_raw()).collect();
    assert_eq!(neighbors, vec![1, 3]);
}

#[test]
fn non_pairwise_lists_are_rejected() {
    let triangle = HyperedgeList::new(3, 3, vec![vec![node(0), node(1), node(2)]]).unwrap();
    let err = AdjacencyMatrix::from_hyperedges(&triangle).unwrap_err();
    match err {
        HsiError::Graph(info) => assert_eq!(info.code, "not-pairwise"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn asymmetric_rows_are_rejected() {
    let rows = vec![
        vec![false, true],
        vec![false, false],
    ];
    let err = AdjacencyMatrix::from_rows(&rows).unwrap_err();
    match err {
        HsiError::Graph(info) => assert_eq!(info.code, "asymmetric-adjacency"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn diagonal_entries_are_rejected() {
    let rows = vec![vec![true]];
    let err = AdjacencyMatrix::from_rows(&rows).unwrap_err();
    match err {
        HsiError::Graph(info) => assert_eq!(info.code, "self-loop"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_sets_are_rejected_by_the_validating_constructor() {
    let err = HyperedgeList::new(
        3,
        2,
        vec![vec![node(0), node(1)], vec![node(1), node(0)]],
    )
    .unwrap_err();
    match err {
        HsiError::Graph(info) => assert_eq!(info.code, "duplicate-edge"),
        other => panic!("unexpected error: {other:?}"),
    }
}
