use crate::math::mercator::{self, LatLon};
use crate::math::polygon_2d::point_in_rings;
use crate::math::Point2;
use crate::operations::project::ProjectedFeature;
use crate::tile::{self, TileData, TileId};

/// Distance in projected meters under which a query point is accepted as
/// inside a feature without running the polygon test.
pub const PROXIMITY_ACCEPT: f64 = 50.0;

/// Tests whether a geographic coordinate lies inside a feature.
///
/// A query within [`PROXIMITY_ACCEPT`] meters of any projected ring vertex
/// is accepted immediately. This shortcut is a best-effort approximation:
/// it can accept points the ray cast would reject, so callers needing exact
/// containment must not rely on it. A query whose containing tile at the
/// feature tile's zoom differs from the feature's own tile is rejected
/// before the ray cast runs; otherwise the query is moved into the raw
/// vertex space of the rings and decided by even-odd ray casting.
#[must_use]
pub fn contains_coordinate(feature: &ProjectedFeature, tile: &TileData, coord: LatLon) -> bool {
    let from = mercator::lat_lon_to_meters(coord);
    let center = tile.rect().center();
    for ring in &feature.points {
        for point in ring {
            let to = Point2::new(
                center.x + point.x / tile.tile_scale,
                center.y + point.y / tile.tile_scale,
            );
            if nalgebra::distance(&from, &to) < PROXIMITY_ACCEPT {
                return true;
            }
        }
    }

    if TileId::for_coordinate(coord, tile.current_zoom) != tile.id {
        return false;
    }

    let query = tile::lat_lon_to_tile_position(coord, tile.current_zoom, feature.extent);
    point_in_rings(query, &feature.geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{GeomKind, VectorFeature, VectorLayer};

    const EXTENT: f64 = 4096.0;

    fn feature_tile(raw_ring: Vec<Point2>) -> (ProjectedFeature, TileData) {
        let id = TileId::new(9372, 12534, 15);
        let tile = TileData::new(
            id,
            15,
            1.0,
            vec![VectorLayer::new("building", EXTENT, Vec::new())],
        );
        let feature = VectorFeature::new(GeomKind::Polygon, vec![raw_ring]);
        let projected = ProjectedFeature::from_feature(&feature, &tile, EXTENT);
        (projected, tile)
    }

    fn quad(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    /// Geographic coordinate of a raw extent-space position in the tile.
    fn coord_at(tile: &TileData, rx: f64, ry: f64) -> LatLon {
        let rect = tile.rect();
        let size = rect.size();
        mercator::meters_to_lat_lon(Point2::new(
            rect.min.x + rx / EXTENT * size.x,
            rect.max.y - ry / EXTENT * size.y,
        ))
    }

    #[test]
    fn interior_point_is_contained() {
        let (feature, tile) = feature_tile(quad(1000.0, 3000.0));
        assert!(contains_coordinate(&feature, &tile, coord_at(&tile, 2000.0, 2000.0)));
    }

    #[test]
    fn far_exterior_point_is_rejected() {
        let (feature, tile) = feature_tile(quad(1000.0, 1500.0));
        // Same tile, well clear of every vertex and outside the ring.
        assert!(!contains_coordinate(&feature, &tile, coord_at(&tile, 3800.0, 3800.0)));
    }

    #[test]
    fn vertex_proximity_accepts_outside_point() {
        let (feature, tile) = feature_tile(quad(1000.0, 3000.0));
        // One raw unit at zoom 15 is ~0.3 m, so a point a few units outside
        // the ring is within the 50 m shortcut radius of its corner vertex.
        let coord = coord_at(&tile, 990.0, 990.0);
        let query = tile::lat_lon_to_tile_position(coord, tile.current_zoom, EXTENT);
        assert!(!point_in_rings(query, &feature.geometry));
        assert!(contains_coordinate(&feature, &tile, coord));
    }

    #[test]
    fn foreign_tile_query_is_rejected() {
        let (feature, tile) = feature_tile(quad(1000.0, 3000.0));
        // A coordinate one tile east: outside the shortcut radius and not
        // in the feature's tile.
        let coord = coord_at(&tile, EXTENT + 2000.0, 2000.0);
        assert!(!contains_coordinate(&feature, &tile, coord));
    }

    #[test]
    fn hole_excludes_query() {
        let id = TileId::new(9372, 12534, 15);
        let tile = TileData::new(id, 15, 1.0, Vec::new());
        let feature = VectorFeature::new(
            GeomKind::Polygon,
            vec![quad(500.0, 3500.0), quad(1500.0, 2500.0)],
        );
        let projected = ProjectedFeature::from_feature(&feature, &tile, EXTENT);

        // Inside the hole, but more than 50 m from the nearest hole vertex
        // (500 raw units ≈ 150 m at zoom 15).
        assert!(!contains_coordinate(&projected, &tile, coord_at(&tile, 2000.0, 2000.0)));
        // In the solid band between hole and outer ring.
        assert!(contains_coordinate(&projected, &tile, coord_at(&tile, 1000.0, 2000.0)));
    }

    #[test]
    fn projected_feature_keeps_both_spaces() {
        let (feature, _tile) = feature_tile(quad(0.0, EXTENT));
        assert_eq!(feature.geometry.len(), 1);
        assert_eq!(feature.points.len(), 1);
        assert_eq!(feature.geometry[0].len(), feature.points[0].len());
        // Raw space is untouched by projection.
        assert_eq!(feature.geometry[0][0], Point2::new(0.0, 0.0));
    }
}
