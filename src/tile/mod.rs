pub mod layer;

pub use layer::{GeomKind, PropertyValue, VectorFeature, VectorLayer};

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::mercator::{self, LatLon, ORIGIN_SHIFT};
use crate::math::{Point2, Vector2};

/// Canonical tile address in the slippy-map quadtree: column, row, zoom.
///
/// Row 0 is the northernmost row; rows grow southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileId {
    /// Creates a new tile id.
    #[must_use]
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// The tile containing the given geographic coordinate at `zoom`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_coordinate(coord: LatLon, zoom: u8) -> Self {
        let n = 2.0_f64.powi(i32::from(zoom));
        let x = ((coord.lon + 180.0) / 360.0 * n).floor();
        let lat_rad = coord.lat.to_radians();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor();
        Self::new(x as u32, y as u32, zoom)
    }

    /// The tile's footprint in web-mercator meters.
    #[must_use]
    pub fn bounds_meters(&self) -> TileRect {
        let n = 2.0_f64.powi(i32::from(self.z));
        let span = 2.0 * ORIGIN_SHIFT / n;
        let min_x = -ORIGIN_SHIFT + f64::from(self.x) * span;
        let max_y = ORIGIN_SHIFT - f64::from(self.y) * span;
        TileRect {
            min: Point2::new(min_x, max_y - span),
            max: Point2::new(min_x + span, max_y),
        }
    }
}

/// Axis-aligned tile footprint in web-mercator meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub min: Point2,
    pub max: Point2,
}

impl TileRect {
    /// Center of the rect.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Width and height of the rect.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}

/// Expresses a geographic coordinate in the raw vertex space of the tile
/// that contains it at `zoom`: x grows east, y grows south, and points
/// inside the tile fall in `[0, extent]` on both axes.
#[must_use]
pub fn lat_lon_to_tile_position(coord: LatLon, zoom: u8, extent: f64) -> Point2 {
    let rect = TileId::for_coordinate(coord, zoom).bounds_meters();
    let meters = mercator::lat_lon_to_meters(coord);
    let size = rect.size();
    Point2::new(
        (meters.x - rect.min.x) / size.x * extent,
        (rect.max.y - meters.y) / size.y * extent,
    )
}

/// One resident tile: its parsed vector layers plus the placement context
/// needed to move geometry between tile-local and geographic space.
///
/// `tile_scale` is the zoom-relative scale factor applied when projecting
/// raw geometry into tile-local rendering space; the mercator footprint is
/// derived from the id and never stored separately.
#[derive(Debug, Clone)]
pub struct TileData {
    pub id: TileId,
    pub current_zoom: u8,
    pub tile_scale: f64,
    rect: TileRect,
    layers: Vec<VectorLayer>,
}

impl TileData {
    /// Creates a tile from its parsed layers.
    #[must_use]
    pub fn new(id: TileId, current_zoom: u8, tile_scale: f64, layers: Vec<VectorLayer>) -> Self {
        Self {
            id,
            current_zoom,
            tile_scale,
            rect: id.bounds_meters(),
            layers,
        }
    }

    /// The tile footprint in web-mercator meters.
    #[must_use]
    pub fn rect(&self) -> &TileRect {
        &self.rect
    }

    /// Looks up a layer by name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&VectorLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}

/// The set of currently resident tiles, keyed by canonical id.
///
/// Tile lifecycle (loading, eviction) is owned by the caller; a missing
/// tile is an expected outcome for queries, not an error.
#[derive(Debug, Default)]
pub struct TileStore {
    tiles: HashMap<TileId, TileData>,
}

impl TileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tile, replacing any tile with the same id.
    pub fn insert(&mut self, tile: TileData) {
        self.tiles.insert(tile.id, tile);
    }

    /// Returns the tile with the given id, if resident.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&TileData> {
        self.tiles.get(&id)
    }

    /// Removes and returns the tile with the given id.
    pub fn remove(&mut self, id: TileId) -> Option<TileData> {
        self.tiles.remove(&id)
    }

    /// Number of resident tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the store holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
