use crate::field::{FieldData, FieldError};
use crate::math::{Point, Real};
use crate::mesh::{Mesh, Node};
use crate::query::GeometryIssue;
use crate::shape::{SideColumn, SideNode};
use num::Zero;

/// Where a mesh edge crosses the meridian `lon0`.
///
/// The interpolation weights are computed once at the surface, in the
/// (longitude, latitude) plane, and reused for every layer below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeCrossing {
    /// The longitude of the meridian.
    pub lon0: Real,
    /// The latitude of the crossing point.
    pub lat0: Real,
    /// The distance from the first endpoint to the crossing point.
    pub d1: Real,
    /// The length of the edge, through the crossing point.
    pub d_total: Real,
}

impl EdgeCrossing {
    /// Locates the crossing of the edge `[n1, n2]` with the meridian `lon0`.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryIssue::DegenerateEdge`] if both endpoints have the
    /// same longitude, or coincide with the crossing point.
    pub fn new(n1: &Node, n2: &Node, lon0: Real) -> Result<Self, GeometryIssue> {
        let dlon = n2.lon - n1.lon;

        if dlon.is_zero() {
            return Err(GeometryIssue::DegenerateEdge(n1.id, n2.id));
        }

        let lat0 = n1.lat + (n2.lat - n1.lat) / dlon * (lon0 - n1.lon);
        let pt0 = Point::new(lon0, lat0);
        let d1 = na::distance(&pt0, &Point::new(n1.lon, n1.lat));
        let d2 = na::distance(&pt0, &Point::new(n2.lon, n2.lat));
        let d_total = d1 + d2;

        if d_total.is_zero() {
            return Err(GeometryIssue::DegenerateEdge(n1.id, n2.id));
        }

        Ok(Self {
            lon0,
            lat0,
            d1,
            d_total,
        })
    }

    /// The side node between `a` and `b`, two nodes of the same layer below
    /// the endpoints of the edge.
    fn side_node(&self, a: &Node, b: &Node, field: &FieldData) -> Result<SideNode, FieldError> {
        let depth = a.depth + (b.depth - a.depth) / self.d_total * self.d1;
        let var = field
            .sample(a.id)?
            .interpolate(&field.sample(b.id)?, self.d1, self.d_total);
        Ok(SideNode::new(self.lon0, self.lat0, depth, var))
    }
}

fn copied_node(node: &Node, field: &FieldData) -> Result<SideNode, FieldError> {
    Ok(SideNode::new(
        node.lon,
        node.lat,
        node.depth,
        field.sample(node.id)?,
    ))
}

/// The column of side nodes interpolated along the edge `[n1, n2]`.
///
/// Both water columns are walked down together and the result stops as soon
/// as either of them ends.
pub fn interpolated_column(
    mesh: &Mesh,
    field: &FieldData,
    n1: &Node,
    n2: &Node,
    edge: &EdgeCrossing,
) -> Result<SideColumn, FieldError> {
    let mut column = SideColumn::new(edge.side_node(n1, n2, field)?);

    for (a, b) in mesh.column(n1).zip(mesh.column(n2)).skip(1) {
        column.push(edge.side_node(a, b, field)?);
    }

    Ok(column)
}

/// The column of side nodes copied from `node`, which lies on the meridian,
/// down to the bottom of its water column.
pub fn coincident_column(
    mesh: &Mesh,
    field: &FieldData,
    node: &Node,
) -> Result<SideColumn, FieldError> {
    let mut column = SideColumn::new(copied_node(node, field)?);

    for below in mesh.column(node).skip(1) {
        column.push(copied_node(below, field)?);
    }

    Ok(column)
}

/// The two columns of side nodes copied from `n1` and `n2`, which both lie
/// on the meridian.
///
/// Both water columns are walked down together, so the two results have the
/// same length: that of the shallower column.
pub fn coincident_columns(
    mesh: &Mesh,
    field: &FieldData,
    n1: &Node,
    n2: &Node,
) -> Result<(SideColumn, SideColumn), FieldError> {
    let mut column1 = SideColumn::new(copied_node(n1, field)?);
    let mut column2 = SideColumn::new(copied_node(n2, field)?);

    for (a, b) in mesh.column(n1).zip(mesh.column(n2)).skip(1) {
        column1.push(copied_node(a, field)?);
        column2.push(copied_node(b, field)?);
    }

    Ok((column1, column2))
}
