use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Geometry kind of a vector-tile feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeomKind {
    Point,
    LineString,
    Polygon,
    Unknown,
}

/// A single feature property value.
///
/// The raw format carries arbitrary string-keyed attributes; they are
/// modeled as a small tagged union rather than an open dynamic type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// A parsed vector-tile feature.
///
/// `geometry` holds the raw rings or lines in tile-extent units, already
/// clipped at the tile boundary by the parser. A line string has one entry
/// per line; a polygon has one entry per ring (outer ring first, holes
/// after).
#[derive(Debug, Clone)]
pub struct VectorFeature {
    pub kind: GeomKind,
    pub geometry: Vec<Vec<Point2>>,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl VectorFeature {
    /// Creates a feature with no properties.
    #[must_use]
    pub fn new(kind: GeomKind, geometry: Vec<Vec<Point2>>) -> Self {
        Self {
            kind,
            geometry,
            properties: BTreeMap::new(),
        }
    }
}

/// A named vector-tile layer whose features share one coordinate extent.
///
/// `extent` is the normalization denominator of the raw format: vertex
/// coordinates span `[0, extent]` across the tile footprint.
#[derive(Debug, Clone)]
pub struct VectorLayer {
    pub name: String,
    pub extent: f64,
    features: Vec<VectorFeature>,
}

impl VectorLayer {
    /// Creates a new layer.
    #[must_use]
    pub fn new(name: impl Into<String>, extent: f64, features: Vec<VectorFeature>) -> Self {
        Self {
            name: name.into(),
            extent,
            features,
        }
    }

    /// Number of features in the layer.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Returns the feature at `index`, if present.
    #[must_use]
    pub fn feature(&self, index: usize) -> Option<&VectorFeature> {
        self.features.get(index)
    }

    /// Iterates the layer's features in source order.
    pub fn features(&self) -> impl Iterator<Item = &VectorFeature> {
        self.features.iter()
    }
}
