//! The FESOM mesh, as handed over by the mesh-construction collaborator.
//!
//! A [`Mesh`] owns every 3D node of the model grid. Nodes are linked to the
//! node directly below them in the same water column, and the horizontal
//! triangles ([`Element`]s) are defined on the surface nodes only: the
//! triangular prisms below a surface element are reached by walking the
//! vertical links of its three corners.

pub use self::mesh::{Column, Element, Mesh, Node};
pub use self::mesh_builder::{MeshBuilder, MeshBuilderError};

mod mesh;
mod mesh_builder;
