use crate::config::ProjectionConfig;
use crate::fixtures::{corridor, grid, islands, AB, BC, DE};
use crate::graph::LinkId;
use crate::route::{DirectStrategy, PathResolver, RouteError, RoutingIndex, SkimStrategy};
use crate::transition::{
    Path, PathExpander, Projector, State, StateCollection, StateError, Transitions,
};

use approx::assert_relative_eq;
use geo::Point;

#[test]
fn state_offsets_must_lie_on_the_link() {
    let graph = corridor();
    let ab = *graph.link(&AB).expect("link exists");

    assert!(State::new(&ab, 0.0).is_ok());
    assert!(State::new(&ab, 100.0).is_ok());
    assert_eq!(
        State::new(&ab, 100.5),
        Err(StateError::OffsetOutOfRange {
            link: AB,
            offset: 100.5,
            length: 100.0
        })
    );
    assert!(State::new(&ab, -1.0).is_err());
    assert!(State::new(&ab, f64::NAN).is_err());
    assert!(State::at_ratio(&ab, 1.5).is_err());

    assert_eq!(
        State::on(&graph, LinkId(7), 0.0),
        Err(StateError::UnknownLink(LinkId(7)))
    );
    assert_eq!(
        State::observed(&ab, 10.0, -3.0),
        Err(StateError::InvalidDistance(-3.0))
    );
}

#[test]
fn paths_must_start_and_end_on_their_states() {
    let graph = corridor();
    let start = State::on(&graph, AB, 10.0).expect("offset lies on the link");
    let end = State::on(&graph, BC, 10.0).expect("offset lies on the link");

    assert!(Path::new(start, vec![AB, BC], end).is_ok());
    assert!(matches!(
        Path::new(start, vec![], end),
        Err(RouteError::InvalidPath(_))
    ));
    assert!(matches!(
        Path::new(start, vec![BC], end),
        Err(RouteError::InvalidPath(_))
    ));
    assert!(matches!(
        Path::new(start, vec![AB], end),
        Err(RouteError::InvalidPath(_))
    ));
    assert!(Path::single(start, end).is_err());
}

#[test_log::test]
fn projects_nearest_links_first() {
    let graph = corridor();
    let projector = Projector::new(&graph, ProjectionConfig::default());

    let states = projector.project(&Point::new(60.0, 10.0));
    let links = states.iter().map(State::link).collect::<Vec<_>>();
    assert_eq!(links, vec![AB, BC]);

    assert_relative_eq!(states[0].offset(), 60.0);
    assert_eq!(states[0].distance(), Some(10.0));
    assert_relative_eq!(states[1].offset(), 10.0);
    assert_eq!(states[1].distance(), Some(40.0));
}

#[test_log::test]
fn projection_is_limited_in_count() {
    let graph = grid(6);
    let config = ProjectionConfig {
        max_candidates: 3,
        distance_threshold: 1_000.0,
    };

    let states = Projector::new(&graph, config).project(&Point::new(250.0, 250.0));
    assert_eq!(states.len(), 3);

    let distances = states
        .iter()
        .filter_map(|state| state.distance())
        .collect::<Vec<_>>();
    assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test_log::test]
fn nothing_within_threshold_projects_empty() {
    let graph = corridor();
    let projector = Projector::new(&graph, ProjectionConfig::default());

    let states = projector.project(&Point::new(500.0, -500.0));
    assert!(states.is_empty());
}

#[test_log::test]
fn node_positions_project_to_link_ends() {
    let graph = corridor();
    let projector = Projector::new(&graph, ProjectionConfig::default());

    // B is where A → B ends and B → C begins.
    let states = projector.project(&Point::new(100.0, 0.0));
    assert_eq!(states.len(), 2);

    for state in &states {
        let link = graph.link(&state.link()).expect("link exists");
        let expected = if link.id == AB { 1.0 } else { 0.0 };
        assert_relative_eq!(state.offset() / link.length, expected);
    }
}

#[test_log::test]
fn projects_positions_in_order() {
    let graph = corridor();
    let projector = Projector::new(&graph, ProjectionConfig::default());

    let positions = [
        Point::new(10.0, 5.0),
        Point::new(900.0, 900.0),
        Point::new(105.0, 90.0),
    ];
    let collections = projector.project_all(&positions);

    assert_eq!(collections.len(), 3);
    assert_eq!(collections[0].first().map(State::link), Some(AB));
    assert!(collections[1].is_empty());
    assert_eq!(collections[2].first().map(State::link), Some(BC));
}

#[test_log::test]
fn expansion_counts_every_pair() {
    let graph = islands();
    let index = RoutingIndex::build(&graph).expect("islands must index");
    let resolver = PathResolver::new(&graph, SkimStrategy::new(&index)).expect("index matches");
    let expander = PathExpander::new(&resolver);

    let from = [AB, DE]
        .into_iter()
        .map(|link| State::on(&graph, link, 50.0).expect("offset lies on the link"))
        .collect::<StateCollection>();
    let to = [AB, BC, DE]
        .into_iter()
        .map(|link| State::on(&graph, link, 75.0).expect("offset lies on the link"))
        .collect::<StateCollection>();

    let transitions = expander
        .paths_between_collections(&from, &to)
        .expect("states are valid");

    // AB reaches AB and BC. DE reaches only DE.
    assert_eq!(transitions.paths.len(), 3);
    assert_eq!(transitions.unreachable, 3);
    assert_eq!(transitions.pairs(), from.len() * to.len());

    assert_eq!(transitions.from, vec![(0, 0), (0, 1), (1, 2)]);
    assert_eq!(transitions.to, vec![(0, 0), (1, 1), (2, 2)]);
    assert_eq!(transitions.paths[1].links(), &[AB, BC]);
}

#[test_log::test]
fn expansion_order_is_row_major() {
    let graph = grid(5);
    let resolver = PathResolver::new(&graph, DirectStrategy).expect("direct covers any graph");
    let expander = PathExpander::new(&resolver);
    let projector = Projector::new(&graph, ProjectionConfig::default());

    let from = projector.project(&Point::new(120.0, 100.0));
    let to = projector.project(&Point::new(300.0, 330.0));
    assert!(!from.is_empty() && !to.is_empty());

    let transitions = expander
        .paths_between_collections(&from, &to)
        .expect("states are valid");

    assert_eq!(transitions.unreachable, 0);
    assert_eq!(transitions.pairs(), from.len() * to.len());

    let expected = (0..from.len())
        .flat_map(|i| (0..to.len()).map(move |j| (i, j)))
        .enumerate()
        .collect::<Vec<_>>();

    for (k, (i, j)) in expected {
        assert_eq!(transitions.from[k], (i, k));
        assert_eq!(transitions.to[k], (k, j));
        assert_eq!(transitions.paths[k].start(), &from[i]);
        assert_eq!(transitions.paths[k].end(), &to[j]);
    }
}

#[test]
fn empty_collections_expand_to_nothing() {
    let graph = corridor();
    let resolver = PathResolver::new(&graph, DirectStrategy).expect("direct covers any graph");
    let expander = PathExpander::new(&resolver);

    let to = StateCollection::new(vec![State::on(&graph, AB, 0.0).expect("valid offset")]);
    let transitions = expander
        .paths_between_collections(&StateCollection::default(), &to)
        .expect("nothing to resolve");

    assert_eq!(transitions, Transitions::default());
}
