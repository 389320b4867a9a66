//! Definition of the triangle shape.

use crate::math::{Point, Real};
use crate::utils;

/// A planar triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// The winding of a triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleOrientation {
    /// The vertices are given in clockwise order.
    Clockwise,
    /// The vertices are given in counterclockwise order.
    CounterClockwise,
    /// The vertices are (almost) collinear.
    Degenerate,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The area of this triangle.
    ///
    /// Never negative, whatever the orientation of the vertices.
    pub fn area(&self) -> Real {
        // Kahan's formula.
        let a = na::distance(&self.a, &self.b);
        let b = na::distance(&self.b, &self.c);
        let c = na::distance(&self.c, &self.a);

        let (c, b, a) = utils::sort3(a, b, c);

        let sqr = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));

        // We take the max(0.0) because it can be slightly negative
        // because of numerical errors due to almost-degenerate triangles.
        sqr.max(0.0).sqrt() * 0.25
    }

    /// The area of this triangle, positive if its vertices are
    /// counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        (ab.x * ac.y - ab.y * ac.x) * 0.5
    }

    /// The winding of this triangle, `Degenerate` if its signed area is
    /// within `epsilon` of zero.
    pub fn orientation(&self, epsilon: Real) -> TriangleOrientation {
        let area = self.signed_area();

        if area > epsilon {
            TriangleOrientation::CounterClockwise
        } else if area < -epsilon {
            TriangleOrientation::Clockwise
        } else {
            TriangleOrientation::Degenerate
        }
    }
}
