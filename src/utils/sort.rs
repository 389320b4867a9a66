use crate::math::Real;

/// Sorts a set of three values in increasing order.
#[inline]
pub fn sort3(a: Real, b: Real, c: Real) -> (Real, Real, Real) {
    let (a, b) = if a > b { (b, a) } else { (a, b) };

    if c < a {
        (c, a, b)
    } else if c < b {
        (a, c, b)
    } else {
        (a, b, c)
    }
}
