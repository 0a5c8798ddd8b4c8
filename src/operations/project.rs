use std::collections::BTreeMap;

use crate::math::mercator::{self, LatLon};
use crate::math::{Point2, Vector2};
use crate::tile::{GeomKind, PropertyValue, TileData, VectorFeature};

/// Maps raw tile-extent vertices into tile-local rendering space.
///
/// The x axis grows east and the z axis grows north; the tile center is the
/// origin. Every raw vertex yields exactly one output point, in source
/// order; duplicate resolution happens downstream in the point registry.
#[must_use]
pub fn project_rings(
    raw: &[Vec<Point2>],
    extent: f64,
    rect_size: Vector2,
    tile_scale: f64,
) -> Vec<Vec<Point2>> {
    raw.iter()
        .map(|ring| {
            ring.iter()
                .map(|p| {
                    let x = (p.x / extent * rect_size.x - rect_size.x / 2.0) * tile_scale;
                    let z = ((extent - p.y) / extent * rect_size.y - rect_size.y / 2.0) * tile_scale;
                    Point2::new(x, z)
                })
                .collect()
        })
        .collect()
}

/// Inverse of [`project_rings`] for a single point: tile-local rendering
/// space back to a geographic coordinate.
///
/// `tile_center_meters` must be the center of the same mercator rect the
/// forward projection was sized from, and `scale` the same scale factor;
/// the two transforms are exact inverses of each other.
#[must_use]
pub fn tile_to_geographic(point: Point2, tile_center_meters: Point2, scale: f64) -> LatLon {
    let meters = Point2::new(
        tile_center_meters.x + point.x / scale,
        tile_center_meters.y + point.y / scale,
    );
    mercator::meters_to_lat_lon(meters)
}

/// Zoom-relative scale factor:
/// `world_relative_scale · 2^(initial_zoom − current_zoom)`.
#[must_use]
pub fn zoom_scale(world_relative_scale: f64, initial_zoom: u8, current_zoom: u8) -> f64 {
    world_relative_scale * 2.0_f64.powi(i32::from(initial_zoom) - i32::from(current_zoom))
}

/// A feature with its geometry carried in both vertex spaces.
///
/// `geometry` keeps the raw tile-extent rings the containment ray cast
/// runs against; `points` holds the same rings projected into tile-local
/// rendering space for proximity checks and graph building.
#[derive(Debug, Clone)]
pub struct ProjectedFeature {
    pub geometry: Vec<Vec<Point2>>,
    pub points: Vec<Vec<Point2>>,
    pub kind: GeomKind,
    pub extent: f64,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ProjectedFeature {
    /// Projects `feature` into `tile`'s local rendering space.
    #[must_use]
    pub fn from_feature(feature: &VectorFeature, tile: &TileData, extent: f64) -> Self {
        let points = project_rings(
            &feature.geometry,
            extent,
            tile.rect().size(),
            tile.tile_scale,
        );
        Self {
            geometry: feature.geometry.clone(),
            points,
            kind: feature.kind,
            extent,
            properties: feature.properties.clone(),
        }
    }
}
