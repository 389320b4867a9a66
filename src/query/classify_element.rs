use crate::math::Real;
use crate::mesh::Element;
use crate::query::{ElementCrossing, GeometryIssue};
use arrayvec::ArrayVec;

const EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [0, 2]];
const OPPOSITE_EDGES: [[usize; 2]; 3] = [[1, 2], [0, 2], [0, 1]];

/// Is the edge `[a, b]` strictly crossed by the meridian `lon0`?
#[inline]
fn straddles(a: Real, b: Real, lon0: Real) -> bool {
    (a < lon0 || b < lon0) && (a > lon0 || b > lon0)
}

/// Classifies how `element` meets the meridian `lon = lon0`.
///
/// The element is considered only if at least one of its corners is north of
/// `lat_min` and at least one is south of `lat_max`, and if its corners are
/// not all strictly on the same side of the meridian. Corners lie on the
/// meridian when their longitude is exactly `lon0`.
///
/// # Errors
///
/// Fails if the three corners lie on the meridian, or if an element with no
/// corner on it is not crossed by exactly two edges.
pub fn classify_element(
    element: &Element,
    lon0: Real,
    lat_min: Real,
    lat_max: Real,
) -> Result<ElementCrossing, GeometryIssue> {
    let lon = element.lon();
    let lat = element.lat();

    let in_window = lat.iter().any(|l| *l >= lat_min) && lat.iter().any(|l| *l <= lat_max);
    let spans_meridian = lon.iter().any(|l| *l <= lon0) && lon.iter().any(|l| *l >= lon0);

    if !in_window || !spans_meridian {
        return Ok(ElementCrossing::Outside);
    }

    let on_meridian: ArrayVec<usize, 3> = (0..3).filter(|i| lon[*i] == lon0).collect();

    match on_meridian.as_slice() {
        [] => {
            let crossing: ArrayVec<[usize; 2], 3> = EDGES
                .into_iter()
                .filter(|[a, b]| straddles(lon[*a], lon[*b], lon0))
                .collect();

            match crossing.as_slice() {
                [e1, e2] => Ok(ElementCrossing::Regular { edges: [*e1, *e2] }),
                other => Err(GeometryIssue::CrossingCount(other.len())),
            }
        }
        [corner] => {
            let opposite = OPPOSITE_EDGES[*corner];
            if straddles(lon[opposite[0]], lon[opposite[1]], lon0) {
                Ok(ElementCrossing::Vertex {
                    corner: *corner,
                    opposite,
                })
            } else {
                Ok(ElementCrossing::Touch { corner: *corner })
            }
        }
        [c1, c2] => Ok(ElementCrossing::Edge {
            corners: [*c1, *c2],
        }),
        _ => Err(GeometryIssue::AllCornersOnMeridian),
    }
}
