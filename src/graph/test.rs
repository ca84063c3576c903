use crate::error::ConfigurationError;
use crate::fixtures::{corridor, grid, link, node, A, AB, B, BC, C};
use crate::graph::{Graph, GraphBuilder, LinkId, NodeId};

#[test_log::test]
fn builds_dense_index_in_record_order() {
    let graph = corridor();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.link_count(), 2);

    for (expected, id) in [A, B, C].into_iter().enumerate() {
        let index = graph.dense().index(&id).expect("node must be indexed");
        assert_eq!(index, expected);
        assert_eq!(graph.dense().id(index), Some(id));
    }

    assert_eq!(graph.dense().index(&NodeId(99)), None);
    assert_eq!(graph.dense().id(3), None);
}

#[test_log::test]
fn dense_index_is_bijective_on_grid() {
    let graph = grid(6);
    let dense = graph.dense();

    assert_eq!(dense.len(), 36);
    for index in 0..dense.len() {
        let id = dense.id(index).expect("every index maps to a node");
        assert_eq!(dense.index(&id), Some(index));
    }
}

#[test]
fn converts_free_flow_minutes_to_seconds() {
    let graph = corridor();

    assert_eq!(graph.link(&AB).map(|link| link.free_flow), Some(60.0));
    assert_eq!(graph.link(&BC).map(|link| link.free_flow), Some(120.0));
    assert_eq!(graph.link_between(&A, &B).map(|link| link.id), Some(AB));
    assert!(graph.link_between(&B, &A).is_none());
}

#[test_log::test]
fn parallel_links_are_preserved_and_tie_broken() {
    let graph = Graph::new(
        [node(1, 0.0, 0.0), node(2, 100.0, 0.0)],
        [
            link(6, A, B, 100.0, 1.0),
            link(5, A, B, 100.0, 2.0),
            link(4, A, B, 120.0, 1.0),
        ],
    )
    .expect("parallel links are allowed");

    assert_eq!(graph.link_count(), 3);
    assert_eq!(graph.graph.edge_count(), 3);
    assert_eq!(graph.parallel_pairs(), 1);

    // Equal free-flow time between 4 and 6, so the smaller id wins.
    assert_eq!(graph.link_between(&A, &B).map(|link| link.id), Some(LinkId(4)));
}

#[test]
fn rejects_empty_networks() {
    assert_eq!(
        GraphBuilder::new().build().err(),
        Some(ConfigurationError::NoNodes)
    );

    assert_eq!(
        GraphBuilder::new().node(node(1, 0.0, 0.0)).build().err(),
        Some(ConfigurationError::NoLinks)
    );
}

#[test]
fn rejects_malformed_records() {
    let duplicate_node = Graph::new(
        [node(1, 0.0, 0.0), node(1, 1.0, 1.0)],
        [link(10, A, A, 0.0, 0.0)],
    );
    assert_eq!(duplicate_node.err(), Some(ConfigurationError::DuplicateNode(A)));

    let unknown_node = Graph::new([node(1, 0.0, 0.0)], [link(10, A, B, 1.0, 1.0)]);
    assert_eq!(
        unknown_node.err(),
        Some(ConfigurationError::UnknownNode { link: AB, node: B })
    );

    let duplicate_link = Graph::new(
        [node(1, 0.0, 0.0), node(2, 1.0, 0.0)],
        [link(10, A, B, 1.0, 1.0), link(10, B, A, 1.0, 1.0)],
    );
    assert_eq!(
        duplicate_link.err(),
        Some(ConfigurationError::DuplicateLink(AB))
    );

    let negative = Graph::new(
        [node(1, 0.0, 0.0), node(2, 1.0, 0.0)],
        [link(10, A, B, 1.0, -1.0)],
    );
    assert!(matches!(
        negative,
        Err(ConfigurationError::InvalidLink { link: AB, .. })
    ));

    let position = Graph::new(
        [node(1, f64::NAN, 0.0), node(2, 1.0, 0.0)],
        [link(10, A, B, 1.0, 1.0)],
    );
    assert_eq!(position.err(), Some(ConfigurationError::InvalidPosition(A)));
}
