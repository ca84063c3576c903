use crate::graph::{Graph, Link, LinkId};
use crate::transition::StateError;

use serde::Serialize;
use std::ops::Deref;

/// A location on the network: a link, and an offset along it.
///
/// An offset always lies within `[0, length]` of its link. The only way
/// to obtain a state is through the validating constructors below, so
/// every state in circulation upholds this.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct State {
    link: LinkId,
    offset: f64,

    /// Distance between the observed position and the point on the
    /// link it was projected to, if this state came from a projection.
    distance: Option<f64>,
}

impl State {
    /// A state `offset` length units along the given link.
    pub fn new(link: &Link, offset: f64) -> Result<State, StateError> {
        if !offset.is_finite() || offset < 0.0 || offset > link.length {
            return Err(StateError::OffsetOutOfRange {
                link: link.id,
                offset,
                length: link.length,
            });
        }

        Ok(State {
            link: link.id,
            offset,
            distance: None,
        })
    }

    /// A state at the given fraction of the link's length.
    pub fn at_ratio(link: &Link, ratio: f64) -> Result<State, StateError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(StateError::OffsetOutOfRange {
                link: link.id,
                offset: ratio * link.length,
                length: link.length,
            });
        }

        State::new(link, ratio * link.length)
    }

    /// A state projected from an observed position `distance` away.
    pub fn observed(link: &Link, offset: f64, distance: f64) -> Result<State, StateError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(StateError::InvalidDistance(distance));
        }

        let mut state = State::new(link, offset)?;
        state.distance = Some(distance);
        Ok(state)
    }

    /// Looks up the link by id, then validates as [`State::new`].
    pub fn on(graph: &Graph, link: LinkId, offset: f64) -> Result<State, StateError> {
        let link = graph.link(&link).ok_or(StateError::UnknownLink(link))?;
        State::new(link, offset)
    }

    #[inline]
    pub fn link(&self) -> LinkId {
        self.link
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }
}

/// The candidate states of a single observed position, nearest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StateCollection {
    states: Vec<State>,
}

impl StateCollection {
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    pub fn into_inner(self) -> Vec<State> {
        self.states
    }
}

impl Deref for StateCollection {
    type Target = [State];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl FromIterator<State> for StateCollection {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StateCollection {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
