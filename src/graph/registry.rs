use crate::math::Point2;

/// Insertion-ordered registry assigning dense integer ids to tile-local
/// points, merging points that fall within a distance tolerance.
///
/// The first point registered in a tolerance neighborhood owns the id;
/// every later point within tolerance of it resolves to that same id. Ids
/// are zero-based, contiguous, and never reused within one registry
/// lifetime.
#[derive(Debug, Clone)]
pub struct PointRegistry {
    points: Vec<Point2>,
    tolerance: f64,
}

impl PointRegistry {
    /// Creates an empty registry. A non-positive `tolerance` selects exact
    /// coordinate matching.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            points: Vec::new(),
            tolerance,
        }
    }

    /// Returns the id of the registered point matching `point`, if any.
    ///
    /// With a positive tolerance the scan runs in insertion order; the
    /// axis-aligned tolerance box is a cheap pre-filter, the circular
    /// distance test decides. The first passing entry wins.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact mode compares bitwise-identical projection output
    pub fn lookup(&self, point: Point2) -> Option<usize> {
        if self.tolerance > 0.0 {
            let tol = self.tolerance;
            self.points.iter().position(|q| {
                let dx = q.x - point.x;
                if dx.abs() > tol {
                    return false;
                }
                let dz = q.y - point.y;
                if dz.abs() > tol {
                    return false;
                }
                dx * dx + dz * dz <= tol * tol
            })
        } else {
            self.points
                .iter()
                .position(|q| q.x == point.x && q.y == point.y)
        }
    }

    /// Resolves `point` to its id, registering it if nothing matches.
    pub fn resolve(&mut self, point: Point2) -> usize {
        if let Some(id) = self.lookup(point) {
            return id;
        }
        self.points.push(point);
        self.points.len() - 1
    }

    /// The point owning `id`.
    #[must_use]
    pub fn point(&self, id: usize) -> Option<Point2> {
        self.points.get(id).copied()
    }

    /// Number of registered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates `(id, point)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point2)> + '_ {
        self.points.iter().copied().enumerate()
    }
}
