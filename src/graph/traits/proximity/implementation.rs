use crate::graph::proximity::definition::{Projected, Scan};
use crate::graph::{Graph, Link, LinkSegment};

use geo::{Distance, Euclidean, Point};
use itertools::Itertools;

#[cfg(feature = "tracing")]
use tracing::Level;

impl Scan for Graph {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    #[inline]
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a LinkSegment> {
        self.index_edge()
            .locate_within_distance(*point, distance * distance)
    }

    #[inline]
    fn scan_link(&self, point: &Point) -> Option<&Link> {
        self.index_edge()
            .nearest_neighbor(point)
            .map(|segment| &self.links[segment.link])
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    #[inline]
    fn scan_links_projected<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = Projected<'a>> {
        let origin = *point;

        self.scan_segments(point, distance)
            .map(|segment| {
                // Locate the fraction upon the line, and the point
                // it represents, which is our projected candidate.
                let (fraction, position) = segment.locate(&origin);

                Projected {
                    link: &self.links[segment.link],
                    fraction,
                    position,
                    distance: Euclidean.distance(position, origin),
                }
            })
            .filter(|projected| projected.distance <= distance)
            .sorted_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.link.id.cmp(&b.link.id))
            })
    }
}
