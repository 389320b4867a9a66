use crate::field::{FieldData, FieldError};
use crate::math::Real;
use crate::mesh::Mesh;
use crate::shape::Segment;
use crate::utils;
use arrayvec::ArrayVec;

/// The mean of a snapshot `field` at the three surface nodes of every cavity
/// element, as `(element index, mean)` pairs in element order.
pub fn cavity_surface_means(
    mesh: &Mesh,
    field: &FieldData,
) -> Result<Vec<(u32, Real)>, FieldError> {
    mesh.elements()
        .filter(|element| element.is_cavity())
        .map(|element| {
            let mut sum = 0.0;
            for node in element.nodes() {
                sum += field.scalar(node.id)?;
            }
            Ok::<_, FieldError>((element.index(), sum / 3.0))
        })
        .collect()
}

/// The segments tracing the ice-shelf fronts, in the circumpolar projection.
///
/// Each element with exactly two cavity nodes, not both coastal, yields the
/// segment joining these two nodes.
pub fn front_contour_segments(mesh: &Mesh) -> Vec<Segment> {
    mesh.elements()
        .filter_map(|element| {
            let cavity: ArrayVec<_, 3> = element
                .nodes()
                .into_iter()
                .filter(|node| node.cavity)
                .collect();

            match cavity.as_slice() {
                [a, b] if !(a.coastal && b.coastal) => Some(Segment::new(
                    utils::circumpolar_xy(a.lon, a.lat),
                    utils::circumpolar_xy(b.lon, b.lat),
                )),
                _ => None,
            }
        })
        .collect()
}
