//! Planar geometry: reprojection of longitude and latitude into
//! the network's planar system, and distances within it.

pub mod error;
pub mod project;


#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use project::{Extent, Project, StatePlane};

use geo::{Distance, Euclidean, Point};

/// Straight-line distance between two planar positions.
#[inline]
pub fn planar_distance(a: &Point, b: &Point) -> f64 {
    Euclidean.distance(*a, *b)
}
