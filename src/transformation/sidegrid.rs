use crate::field::FieldData;
use crate::math::Real;
use crate::mesh::{Element, Mesh};
use crate::query::{classify_element, ElementCrossing};
use crate::shape::{SideColumn, SideGrid};
use crate::transformation::{
    coincident_column, coincident_columns, interpolated_column, EdgeCrossing, SliceError,
    SliceParameters,
};
use crate::utils::SortedPair;
use hashbrown::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the zonal cross-section of `field` along the meridian
/// `params.lon0`.
///
/// Each mesh element crossed by the meridian inside the latitude window
/// yields one pair of columns of side nodes, interpolated along its crossing
/// edges or copied from its corners lying on the meridian. Pairs appear in
/// the order of the elements that produced them, and each is then split into
/// one quadrilateral side element per layer common to both of its columns.
///
/// # Errors
///
/// Fails if the latitude window is empty, if the field holds fewer nodes
/// than the mesh, or if a crossed element cannot be sliced.
pub fn build_sidegrid(
    mesh: &Mesh,
    field: &FieldData,
    params: &SliceParameters,
) -> Result<SideGrid, SliceError> {
    params.validate()?;
    field.check_covers(mesh.num_nodes())?;

    let mut crossings = classify_elements(mesh, params)?;

    if params.merge_shared_edges {
        merge_shared_edges(mesh, &mut crossings);
    }

    let lon0 = params.lon0;
    let element_columns = |(element, crossing): &(u32, ElementCrossing)| {
        crossing_columns(mesh, field, mesh.element(*element), *crossing, lon0)
    };

    #[cfg(not(feature = "parallel"))]
    let columns: Vec<_> = crossings
        .iter()
        .map(element_columns)
        .collect::<Result<_, _>>()?;
    #[cfg(feature = "parallel")]
    let columns: Vec<_> = crossings
        .par_iter()
        .map(element_columns)
        .collect::<Result<_, _>>()?;

    let mut grid = SideGrid::new(lon0);
    for (column1, column2) in columns {
        let _ = grid.push_pair(column1, column2);
    }
    grid.assemble();

    log::debug!(
        "slice at lon0 = {}: {} crossed elements, {} side nodes, {} side elements",
        lon0,
        grid.pairs().len(),
        grid.columns().iter().map(|c| c.len()).sum::<usize>(),
        grid.elements().len()
    );

    Ok(grid)
}

/// The elements contributing to the slice, with their crossing, in element
/// order.
fn classify_elements(
    mesh: &Mesh,
    params: &SliceParameters,
) -> Result<Vec<(u32, ElementCrossing)>, SliceError> {
    let classify = |element: Element| -> Result<Option<(u32, ElementCrossing)>, SliceError> {
        let crossing = classify_element(&element, params.lon0, params.lat_min, params.lat_max)
            .map_err(|reason| SliceError::InvalidGeometry {
                element: element.index(),
                reason,
            })?;

        match crossing {
            ElementCrossing::Touch { corner } => {
                log::debug!(
                    "element {} touches the meridian at its corner {} only, skipping it",
                    element.index(),
                    corner
                );
                Ok(None)
            }
            ElementCrossing::Outside => Ok(None),
            _ => Ok(Some((element.index(), crossing))),
        }
    };

    #[cfg(not(feature = "parallel"))]
    let crossings = mesh
        .elements()
        .map(classify)
        .filter_map(Result::transpose)
        .collect();
    #[cfg(feature = "parallel")]
    let crossings = (0..mesh.num_elements() as u32)
        .into_par_iter()
        .map(|i| classify(mesh.element(i)))
        .filter_map(Result::transpose)
        .collect();

    crossings
}

/// Drops every edge crossing whose edge was already sliced by a previous
/// element.
fn merge_shared_edges(mesh: &Mesh, crossings: &mut Vec<(u32, ElementCrossing)>) {
    let mut sliced_edges = HashSet::new();

    crossings.retain(|(element, crossing)| match crossing {
        ElementCrossing::Edge { corners } => {
            let idx = mesh.indices()[*element as usize];
            let edge = SortedPair::new(idx[corners[0]], idx[corners[1]]);

            if sliced_edges.insert(edge) {
                true
            } else {
                log::debug!(
                    "edge {:?} of element {} was already sliced, skipping it",
                    *edge,
                    element
                );
                false
            }
        }
        _ => true,
    });
}

/// The two columns bounding the intersection of `element` with the meridian.
fn crossing_columns(
    mesh: &Mesh,
    field: &FieldData,
    element: Element,
    crossing: ElementCrossing,
    lon0: Real,
) -> Result<(SideColumn, SideColumn), SliceError> {
    let nodes = element.nodes();
    let interpolate = |[a, b]: [usize; 2]| -> Result<SideColumn, SliceError> {
        let edge = EdgeCrossing::new(nodes[a], nodes[b], lon0).map_err(|reason| {
            SliceError::InvalidGeometry {
                element: element.index(),
                reason,
            }
        })?;
        Ok(interpolated_column(mesh, field, nodes[a], nodes[b], &edge)?)
    };

    match crossing {
        ElementCrossing::Regular { edges: [e1, e2] } => Ok((interpolate(e1)?, interpolate(e2)?)),
        ElementCrossing::Vertex { corner, opposite } => Ok((
            coincident_column(mesh, field, nodes[corner])?,
            interpolate(opposite)?,
        )),
        ElementCrossing::Edge { corners: [c1, c2] } => {
            Ok(coincident_columns(mesh, field, nodes[c1], nodes[c2])?)
        }
        ElementCrossing::Outside | ElementCrossing::Touch { .. } => {
            unreachable!("elements not crossing the meridian are filtered out before slicing")
        }
    }
}
