use crate::math::{Point, Real, DEG_TO_RAD};

/// Projects a (longitude, latitude) position, in degrees, onto the
/// circumpolar plane centred on the South Pole.
///
/// The distance to the origin is `lat + 90` (so the pole maps to the origin
/// and 30°S to a radius of 60) and longitude 0 points along `+y`.
#[inline]
pub fn circumpolar_xy(lon: Real, lat: Real) -> Point<Real> {
    let rho = lat + 90.0;
    let theta = lon * DEG_TO_RAD + core::f64::consts::FRAC_PI_2 as Real;
    Point::new(-rho * theta.cos(), rho * theta.sin())
}
