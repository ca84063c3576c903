use crate::route::{PathResolver, Resolution, RouteError, RouteStrategy};
use crate::transition::{Path, StateCollection};

use log::debug;
use measure_time::debug_time;
use rayon::prelude::*;
use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::Level;

/// The bipartite candidate-path graph between two state collections.
///
/// Every resolved path `k` between state `i` of the first collection and
/// state `j` of the second contributes the edges `(i, k)` to [`from`](#structfield.from)
/// and `(k, j)` to [`to`](#structfield.to). Edges appear in row-major order of
/// the state pairs, `i` outer and `j` inner.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Transitions {
    /// `(from-state index, path index)` edges.
    pub from: Vec<(usize, usize)>,
    pub paths: Vec<Path>,
    /// `(path index, to-state index)` edges.
    pub to: Vec<(usize, usize)>,
    /// Number of state pairs with no connecting path.
    pub unreachable: usize,
}

impl Transitions {
    /// Number of state pairs considered, reachable or not.
    pub fn pairs(&self) -> usize {
        self.paths.len() + self.unreachable
    }
}

/// Expands pairs of state collections into every connecting path.
#[derive(Debug)]
pub struct PathExpander<'r, 'a, S> {
    resolver: &'r PathResolver<'a, S>,
}

impl<'r, 'a, S> PathExpander<'r, 'a, S>
where
    S: RouteStrategy,
{
    pub fn new(resolver: &'r PathResolver<'a, S>) -> Self {
        Self { resolver }
    }

    /// Resolves a path between every state of `from` and every state of `to`.
    ///
    /// Pairs are resolved in parallel, but the output is always in row-major
    /// order. Unreachable pairs add no edges and only count towards
    /// [`Transitions::unreachable`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::DEBUG))]
    pub fn paths_between_collections(
        &self,
        from: &StateCollection,
        to: &StateCollection,
    ) -> Result<Transitions, RouteError> {
        debug_time!("expanding {} x {} state pairs", from.len(), to.len());

        let resolved = (0..from.len())
            .flat_map(|i| (0..to.len()).map(move |j| (i, j)))
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(i, j)| {
                self.resolver
                    .get_path(&from[i], &to[j])
                    .map(|resolution| (i, j, resolution))
            })
            .collect::<Result<Vec<_>, RouteError>>()?;

        let mut transitions = Transitions::default();
        for (i, j, resolution) in resolved {
            match resolution {
                Resolution::Found(path) => {
                    let k = transitions.paths.len();
                    transitions.from.push((i, k));
                    transitions.paths.push(path);
                    transitions.to.push((k, j));
                }
                Resolution::Unreachable => transitions.unreachable += 1,
            }
        }

        debug!(
            "Resolved {} paths, {} pairs unreachable",
            transitions.paths.len(),
            transitions.unreachable
        );

        Ok(transitions)
    }
}
