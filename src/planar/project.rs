//! Required structures to project between coordinate systems.

use crate::planar::GeoError;

use geo::{coord, Coord, Point, Rect};
use std::f64::consts::FRAC_PI_4;

/// Allows for projection from longitude and latitude into another system.
pub trait Project: Sized {
    /// Projects a longitude/latitude position, in degrees.
    ///
    /// ### Example
    /// ```rust
    /// use hwynet::planar::{Extent, Project, StatePlane};
    /// use geo::point;
    ///
    /// // San Francisco City Hall
    /// let value = point! { x: -122.4194, y: 37.7793 };
    /// let StatePlane(projected) = StatePlane::project(value).unwrap();
    /// assert!(Extent::SAN_FRANCISCO.contains(&projected));
    /// ```
    fn project(value: Point) -> Result<Self, GeoError>;
}

/// Lambert Conformal Conic (two standard parallels) on the GRS80 ellipsoid.
struct LambertConic {
    semi_major: f64,
    eccentricity: f64,
    n: f64,
    f: f64,
    rho_origin: f64,
    lon_origin: f64,
    false_easting: f64,
    false_northing: f64,
}

impl LambertConic {
    const GRS80_SEMI_MAJOR: f64 = 6_378_137.0;
    const GRS80_INVERSE_FLATTENING: f64 = 298.257_222_101;

    /// NAD83 / California zone III, with its false origin in metres.
    fn california_zone_3() -> Self {
        Self::new(
            38.433_333_333_33,
            37.066_666_666_667,
            36.5,
            -120.5,
            2_000_000.0,
            500_000.0,
        )
    }

    fn new(
        lat_1: f64,
        lat_2: f64,
        lat_0: f64,
        lon_0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let flattening = 1.0 / Self::GRS80_INVERSE_FLATTENING;
        let eccentricity = (flattening * (2.0 - flattening)).sqrt();

        let m = |phi: f64| phi.cos() / (1.0 - (eccentricity * phi.sin()).powi(2)).sqrt();
        let (phi_1, phi_2) = (lat_1.to_radians(), lat_2.to_radians());

        let n = (m(phi_1).ln() - m(phi_2).ln())
            / (Self::t(eccentricity, phi_1).ln() - Self::t(eccentricity, phi_2).ln());
        let f = m(phi_1) / (n * Self::t(eccentricity, phi_1).powf(n));

        let mut conic = Self {
            semi_major: Self::GRS80_SEMI_MAJOR,
            eccentricity,
            n,
            f,
            rho_origin: 0.0,
            lon_origin: lon_0.to_radians(),
            false_easting,
            false_northing,
        };

        conic.rho_origin = conic.rho(lat_0.to_radians());
        conic
    }

    fn t(eccentricity: f64, phi: f64) -> f64 {
        let sin = eccentricity * phi.sin();
        (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - sin) / (1.0 + sin)).powf(eccentricity / 2.0)
    }

    fn rho(&self, phi: f64) -> f64 {
        self.semi_major * self.f * Self::t(self.eccentricity, phi).powf(self.n)
    }

    /// Easting and northing, in metres.
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let theta = self.n * (lon.to_radians() - self.lon_origin);
        let rho = self.rho(lat.to_radians());

        (
            self.false_easting + rho * theta.sin(),
            self.false_northing + self.rho_origin - rho * theta.cos(),
        )
    }
}

/// A position in the California zone III state plane, in US survey feet.
///
/// This is the planar system road networks of the San Francisco
/// Bay Area are supplied in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatePlane(pub Point);

impl StatePlane {
    /// Metres in one US survey foot.
    pub const SURVEY_FOOT: f64 = 1_200.0 / 3_937.0;
}

impl Project for StatePlane {
    fn project(value: Point) -> Result<Self, GeoError> {
        let (lon, lat) = value.x_y();

        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidCoordinate(format!("longitude {lon}")));
        }

        // The conic is undefined at the poles.
        if !lat.is_finite() || lat.abs() >= 90.0 {
            return Err(GeoError::InvalidCoordinate(format!("latitude {lat}")));
        }

        let (x, y) = LambertConic::california_zone_3().forward(lon, lat);
        Ok(StatePlane(Point::new(
            x / Self::SURVEY_FOOT,
            y / Self::SURVEY_FOOT,
        )))
    }
}

/// A rectangular study area, in network planar units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Coord,
    pub max: Coord,
}

impl Extent {
    /// San Francisco, in [`StatePlane`] feet.
    pub const SAN_FRANCISCO: Extent = Extent {
        min: coord! { x: 5_979_762.107_16, y: 2_074_908.262_03 },
        max: coord! { x: 6_027_567.229_25, y: 2_130_887.565_30 },
    };

    /// Whether the point lies strictly inside the extent.
    pub fn contains(&self, point: &Point) -> bool {
        let (x, y) = point.x_y();
        self.min.x < x && x < self.max.x && self.min.y < y && y < self.max.y
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.min, self.max)
    }
}
