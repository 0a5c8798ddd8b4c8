use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::Point2;

/// Equatorial earth radius of the EPSG:3857 spheroid, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the web-mercator world span: longitude ±180° maps to ±`ORIGIN_SHIFT` meters.
pub const ORIGIN_SHIFT: f64 = PI * EARTH_RADIUS;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Creates a new geographic coordinate.
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Projects a geographic coordinate into web-mercator meters.
///
/// Valid for latitudes within the mercator domain (±85.0511°); the poles
/// map to infinity.
#[must_use]
pub fn lat_lon_to_meters(coord: LatLon) -> Point2 {
    let mx = coord.lon * ORIGIN_SHIFT / 180.0;
    let my = ((90.0 + coord.lat) * PI / 360.0).tan().ln() / (PI / 180.0) * ORIGIN_SHIFT / 180.0;
    Point2::new(mx, my)
}

/// Inverse of [`lat_lon_to_meters`].
#[must_use]
pub fn meters_to_lat_lon(meters: Point2) -> LatLon {
    let lon = meters.x / ORIGIN_SHIFT * 180.0;
    let y = meters.y / ORIGIN_SHIFT * 180.0;
    let lat = 180.0 / PI * (2.0 * (y * PI / 180.0).exp().atan() - PI / 2.0);
    LatLon::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn null_island_projects_to_origin() {
        let m = lat_lon_to_meters(LatLon::new(0.0, 0.0));
        assert!(m.x.abs() < 1e-9);
        assert!(m.y.abs() < 1e-9);
    }

    #[test]
    fn antimeridian_projects_to_origin_shift() {
        let m = lat_lon_to_meters(LatLon::new(0.0, 180.0));
        assert_relative_eq!(m.x, ORIGIN_SHIFT, max_relative = 1e-12);
    }

    #[test]
    fn forty_five_north_known_value() {
        // R * ln(tan(67.5°)) ≈ 5 621 521.486 m.
        let m = lat_lon_to_meters(LatLon::new(45.0, 0.0));
        assert_relative_eq!(m.y, 5_621_521.486_192, max_relative = 1e-9);
    }

    #[test]
    fn meters_round_trip() {
        for &(lat, lon) in &[
            (0.0, 0.0),
            (45.0, 90.0),
            (-33.8688, 151.2093),
            (60.1699, 24.9384),
            (-84.0, -179.5),
        ] {
            let back = meters_to_lat_lon(lat_lon_to_meters(LatLon::new(lat, lon)));
            assert_relative_eq!(back.lat, lat, epsilon = 1e-9);
            assert_relative_eq!(back.lon, lon, epsilon = 1e-9);
        }
    }
}
