use crate::graph::LinkIx;

use geo::{Distance, Euclidean, Line, LineLocatePoint, Point};
use rstar::{PointDistance, RTreeObject, AABB};

/// The geometry of a single link, as stored in the spatial index.
///
/// The segment refers back to its link by position within the graph,
/// so the index holds no copy of the link attributes.
#[derive(Clone, Copy, Debug)]
pub struct LinkSegment {
    pub link: LinkIx,
    pub line: Line,
}

impl LinkSegment {
    pub fn new(link: LinkIx, line: Line) -> Self {
        Self { link, line }
    }

    /// Locates the closest point on the segment to `point`.
    ///
    /// Returns the fraction along the segment in `[0, 1]`, measured from
    /// the link source, together with the closest point itself.
    ///
    /// ```text
    ///                  point
    ///                    |
    ///     Source         |              Target
    ///       +------------|---------------+
    ///                   0.4
    /// ```
    ///
    /// A degenerate (zero-length) segment locates every point at its source.
    pub fn locate(&self, point: &Point) -> (f64, Point) {
        let fraction = self
            .line
            .line_locate_point(point)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);

        let closest = Point(self.line.start + self.line.delta() * fraction);
        (fraction, closest)
    }

    /// The shortest distance from `point` to any point on the segment.
    #[inline]
    pub fn distance(&self, point: &Point) -> f64 {
        let (_, closest) = self.locate(point);
        Euclidean.distance(closest, *point)
    }
}

impl RTreeObject for LinkSegment {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.line.start_point(), self.line.end_point())
    }
}

impl PointDistance for LinkSegment {
    fn distance_2(&self, point: &Point) -> f64 {
        let distance = self.distance(point);
        distance * distance
    }
}
