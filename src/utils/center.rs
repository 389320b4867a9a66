use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use sidegrid::math::Point;
/// use sidegrid::utils::center;
///
/// let points = [
///     Point::new(-61.0, -10.0),
///     Point::new(-59.0, -10.0),
///     Point::new(-59.0, -30.0),
///     Point::new(-61.0, -30.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x + 60.0).abs() < 1.0e-9);
/// assert!((c.y + 20.0).abs() < 1.0e-9);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = 1.0 / (pts.len() as Real);

    let mut res = pts[0] * denom;

    for pt in &pts[1..] {
        res += pt.coords * denom;
    }

    res
}
