//! Synthetic networks shared by the unit tests.

use crate::graph::{Graph, LinkId, LinkRecord, NodeId, NodeRecord};

pub(crate) const A: NodeId = NodeId(1);
pub(crate) const B: NodeId = NodeId(2);
pub(crate) const C: NodeId = NodeId(3);
pub(crate) const D: NodeId = NodeId(4);
pub(crate) const E: NodeId = NodeId(5);

pub(crate) const AB: LinkId = LinkId(10);
pub(crate) const BC: LinkId = LinkId(20);
pub(crate) const DE: LinkId = LinkId(30);

pub(crate) fn node(id: u64, x: f64, y: f64) -> NodeRecord {
    NodeRecord {
        id: NodeId(id),
        x,
        y,
    }
}

pub(crate) fn link(id: u64, start: NodeId, end: NodeId, length: f64, minutes: f64) -> LinkRecord {
    LinkRecord {
        id: LinkId(id),
        start,
        end,
        length,
        free_flow_minutes: minutes,
    }
}

/// `A → B → C`, each link 100 units long.
/// `A → B` takes 60s at free-flow, `B → C` takes 120s.
///
///     C (100, 100)
///     ^
///     |
///     A ------> B
///  (0, 0)    (100, 0)
pub(crate) fn corridor() -> Graph {
    Graph::new(corridor_nodes(), corridor_links()).expect("corridor is well formed")
}

fn corridor_nodes() -> Vec<NodeRecord> {
    vec![node(1, 0.0, 0.0), node(2, 100.0, 0.0), node(3, 100.0, 100.0)]
}

fn corridor_links() -> Vec<LinkRecord> {
    vec![link(10, A, B, 100.0, 1.0), link(20, B, C, 100.0, 2.0)]
}

/// The [`corridor`], with a disconnected `D → E` link far away.
pub(crate) fn islands() -> Graph {
    let mut nodes = corridor_nodes();
    nodes.extend([node(4, 1_000.0, 1_000.0), node(5, 1_100.0, 1_000.0)]);

    let mut links = corridor_links();
    links.push(link(30, D, E, 100.0, 1.0));

    Graph::new(nodes, links).expect("islands are well formed")
}

/// A `size` × `size` grid with 100 unit spacing, and links in both
/// directions between neighbours. Free-flow times vary with position
/// so that shortest paths are not trivially unique by hop count.
pub(crate) fn grid(size: u64) -> Graph {
    let id = |row: u64, col: u64| row * size + col + 1;

    let nodes = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| node(id(row, col), col as f64 * 100.0, row as f64 * 100.0))
        .collect::<Vec<_>>();

    let mut links = Vec::new();
    let mut next = 1_000;
    let mut connect = |a: u64, b: u64| {
        let minutes = 0.5 + ((a * 7 + b * 3) % 5) as f64 * 0.25;
        links.push(link(next, NodeId(a), NodeId(b), 100.0, minutes));
        links.push(link(next + 1, NodeId(b), NodeId(a), 100.0, minutes + 0.25));
        next += 2;
    };

    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                connect(id(row, col), id(row, col + 1));
            }
            if row + 1 < size {
                connect(id(row, col), id(row + 1, col));
            }
        }
    }

    Graph::new(nodes, links).expect("grid is well formed")
}
