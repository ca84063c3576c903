use crate::graph::LinkId;
use crate::route::RouteError;
use crate::transition::State;

use serde::Serialize;

/// A connected sequence of links, from one state to another.
///
/// The first link is always the start state's link, and the last
/// is always the end state's link. A path joining two states on the
/// same link consists of that link alone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path {
    start: State,
    links: Vec<LinkId>,
    end: State,
}

impl Path {
    pub fn new(start: State, links: Vec<LinkId>, end: State) -> Result<Path, RouteError> {
        match (links.first(), links.last()) {
            (None, _) | (_, None) => Err(RouteError::InvalidPath("path has no links")),
            (Some(first), _) if *first != start.link() => Err(RouteError::InvalidPath(
                "first link differs from the start state's link",
            )),
            (_, Some(last)) if *last != end.link() => Err(RouteError::InvalidPath(
                "last link differs from the end state's link",
            )),
            _ => Ok(Path { start, links, end }),
        }
    }

    /// The path between two states on the same link.
    pub fn single(start: State, end: State) -> Result<Path, RouteError> {
        Path::new(start, vec![start.link()], end)
    }

    #[inline]
    pub fn start(&self) -> &State {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &State {
        &self.end
    }

    #[inline]
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false, a path holds at least one link.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
