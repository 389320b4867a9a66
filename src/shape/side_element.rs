use crate::field::FieldValue;
use crate::math::{Point, Real, DEG_TO_RAD, EARTH_RADIUS};
use crate::shape::{SideNode, SideNodeId, Triangle};
use crate::utils;

/// A quadrilateral cell of the zonal cross-section: the intersection of one
/// mesh prism with the slicing longitude.
///
/// Its four corners trace the boundary continuously: top-south, top-north,
/// bottom-north, bottom-south.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideElement {
    snodes: [SideNodeId; 4],
    /// The latitude of each corner, in degrees.
    pub y: [Real; 4],
    /// The negated depth of each corner (so that up is positive), in metres.
    pub z: [Real; 4],
    /// The mean of the field values at the four corners.
    ///
    /// This is only the arithmetic mean of the corners, not an integral over
    /// the quadrilateral.
    pub var: FieldValue,
}

impl SideElement {
    /// Creates a side element from its four corners, which must be given in
    /// boundary order (never jumping between diagonal corners).
    pub fn new(snodes: [SideNodeId; 4], corners: [&SideNode; 4]) -> Self {
        Self {
            snodes,
            y: corners.map(|n| n.lat),
            z: corners.map(|n| -n.depth),
            var: FieldValue::mean(&corners.map(|n| &n.var)),
        }
    }

    /// The identifiers of the four corners, in boundary order.
    #[inline]
    pub fn snodes(&self) -> &[SideNodeId; 4] {
        &self.snodes
    }

    /// The corners in the (latitude, height) plane, latitude in degrees.
    #[inline]
    pub fn points(&self) -> [Point<Real>; 4] {
        [0, 1, 2, 3].map(|i| Point::new(self.y[i], self.z[i]))
    }

    /// The area of this element, in square metres.
    ///
    /// Latitudes are converted to distances along the meridian. The
    /// quadrilateral is split along the diagonal from its first to its third
    /// corner.
    pub fn area(&self) -> Real {
        let scale = DEG_TO_RAD * EARTH_RADIUS;
        Self::split_area(self.points().map(|pt| Point::new(pt.x * scale, pt.y)))
    }

    /// The area of this element in the raw (degrees of latitude, metres of
    /// depth) plane.
    pub fn area_degrees(&self) -> Real {
        Self::split_area(self.points())
    }

    /// The geometric center of the four corners, in the (latitude, height)
    /// plane.
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.points())
    }

    fn split_area(pts: [Point<Real>; 4]) -> Real {
        Triangle::new(pts[0], pts[1], pts[2]).area() + Triangle::new(pts[0], pts[2], pts[3]).area()
    }
}
