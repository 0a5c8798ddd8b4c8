use super::Point2;

/// Even-odd ray-casting containment test against a single ring.
///
/// Casts a ray from the query point toward +x and counts edge crossings.
/// Rings with fewer than 3 vertices contain nothing.
#[must_use]
pub fn point_in_ring(point: Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = ring[i];
        let pj = ring[j];
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Even-odd containment test against a full ring set.
///
/// Crossing parity accumulates across rings, so holes encoded as extra
/// rings flip the result.
#[must_use]
pub fn point_in_rings(point: Point2, rings: &[Vec<Point2>]) -> bool {
    rings
        .iter()
        .fold(false, |inside, ring| inside ^ point_in_ring(point, ring))
}
