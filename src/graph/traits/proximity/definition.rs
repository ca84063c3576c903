use crate::graph::{Link, LinkSegment};

use geo::Point;

/// A link located relative to some query position.
#[derive(Clone, Copy, Debug)]
pub struct Projected<'a> {
    pub link: &'a Link,

    /// Fraction along the link geometry, from its source, in `[0, 1]`.
    pub fraction: f64,

    /// The closest point on the link to the query position.
    pub position: Point,

    /// Distance between the query position and [`position`](#structfield.position).
    pub distance: f64,
}

impl Projected<'_> {
    /// The offset along the link, in the link's own length units.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.fraction * self.link.length
    }
}

/// Trait containing utility functions to find links upon a root structure.
pub trait Scan {
    /// Returns every link segment within `distance` of the input [point](Point),
    /// in no particular order.
    ///
    /// ### Note
    /// This is a true distance scan: segments are measured to their closest
    /// point, not to their bounding box, so long links passing near the point
    /// are found even when their nodes are far away.
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a LinkSegment>;

    /// Searches for, and returns a reference to the nearest link to the origin
    /// [point](Point), regardless of distance. None only for an empty index.
    fn scan_link(&self, point: &Point) -> Option<&Link>;

    /// Returns the [`Projected`] position on each link within `distance`,
    /// sorted nearest first, ties broken by link id.
    ///
    /// ### Note
    /// This is achieved by finding the closest point upon the straight line
    /// of every link in the scan. This is a bounded projection.
    fn scan_links_projected<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = Projected<'a>>;
}
