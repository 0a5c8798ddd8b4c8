use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyGraph, PointRegistry};
use crate::math::mercator::LatLon;
use crate::operations::project::{project_rings, tile_to_geographic};
use crate::tile::{GeomKind, TileData, TileId, TileStore};

/// Name of the layer queried for road features.
pub const ROAD_LAYER: &str = "road";

/// Finds every road intersection in the given tile, as geographic
/// coordinates.
///
/// Line-string and polygon features of the tile's `road` layer are merged
/// into one undirected graph, deduplicating vertices within a distance
/// tolerance derived from the layer extent; a graph node where three or
/// more distinct segments converge is reported as an intersection. Results
/// are ordered by point registration order and are deterministic for
/// identical input.
///
/// A tile absent from `store`, a tile without a `road` layer, and a road
/// network without intersections all yield an empty result.
///
/// # Errors
///
/// Returns [`GraphError::UnresolvedRingClosure`] if a polygon ring's first
/// vertex cannot be re-resolved when closing the ring.
pub fn find_intersections(store: &TileStore, tile_id: TileId) -> Result<Vec<LatLon>> {
    let Some(tile) = store.tile(tile_id) else {
        return Ok(Vec::new());
    };

    let (registry, lines) = collect_road_features(tile)?;

    let mut graph = AdjacencyGraph::new();
    for line in &lines {
        graph.add_polyline(line);
    }

    let crossings = graph.intersections();
    debug!(
        "tile {}/{}/{}: {} polylines, {} points, {} intersections",
        tile_id.z,
        tile_id.x,
        tile_id.y,
        lines.len(),
        registry.len(),
        crossings.len()
    );

    let center = tile.rect().center();
    Ok(crossings
        .into_iter()
        .filter_map(|id| registry.point(id))
        .map(|point| tile_to_geographic(point, center, tile.tile_scale))
        .collect())
}

/// Collects the road layer's projected polylines, registering every vertex.
///
/// Returns the registry and one id sequence per source polyline. Polygon
/// rings are closed by re-appending their first vertex's id, turning the
/// ring into an explicit cycle.
fn collect_road_features(tile: &TileData) -> Result<(PointRegistry, Vec<Vec<usize>>)> {
    let mut lines = Vec::new();
    let Some(layer) = tile.layer(ROAD_LAYER) else {
        return Ok((PointRegistry::new(0.0), lines));
    };

    let tolerance = 1.0 / layer.extent;
    let mut registry = PointRegistry::new(tolerance);
    let rect_size = tile.rect().size();

    for feature in layer.features() {
        let is_polygon = feature.kind == GeomKind::Polygon;
        if feature.kind != GeomKind::LineString && !is_polygon {
            continue;
        }

        let projected = project_rings(&feature.geometry, layer.extent, rect_size, tile.tile_scale);
        for polyline in &projected {
            if polyline.len() < 2 {
                continue;
            }

            let mut line: Vec<usize> = polyline.iter().map(|p| registry.resolve(*p)).collect();

            if is_polygon {
                let first = polyline[0];
                let id = registry
                    .lookup(first)
                    .ok_or(GraphError::UnresolvedRingClosure {
                        x: first.x,
                        z: first.y,
                    })?;
                line.push(id);
            }

            lines.push(line);
        }
    }

    Ok((registry, lines))
}
