use crate::math::Real;
use crate::mesh::{Mesh, Node};

/// Indicated an inconsistency while building a mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A mesh must contain at least one element.
    #[error("a mesh must contain at least one element")]
    EmptyElements,
    /// The node stored at `index` does not carry the id `index`.
    #[error("the node at index {index} has the id {id}")]
    NodeIdMismatch {
        /// Position of the node in the node buffer.
        index: u32,
        /// The id the node carries.
        id: u32,
    },
    /// An element references a node that does not exist.
    #[error("element {element} references the nonexistent node {node}")]
    InvalidNodeIndex {
        /// The faulty element.
        element: u32,
        /// The out-of-range node index.
        node: u32,
    },
    /// A node is linked below itself or below a node that does not exist.
    #[error("node {node} has an invalid node below it: {below}")]
    InvalidBelowLink {
        /// The node carrying the link.
        node: u32,
        /// The target of the link.
        below: u32,
    },
    /// Two nodes claim the same node below them.
    #[error("node {below} is below more than one node")]
    SharedBelow {
        /// The node targeted twice.
        below: u32,
    },
    /// A water column loops back onto itself.
    #[error("the water column containing node {node} is cyclic")]
    CyclicColumn {
        /// A node of the cycle.
        node: u32,
    },
}

/// Incremental construction of a [`Mesh`].
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use sidegrid::mesh::MeshBuilder;
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_node(-1.0, -60.0, 0.0);
/// let b = builder.add_node(1.0, -61.0, 0.0);
/// let c = builder.add_node(1.0, -59.0, 0.0);
/// let _ = builder.add_node_below(a, 100.0);
/// let _ = builder.add_element([a, b, c]);
///
/// let mesh = builder.build().unwrap();
/// assert_eq!(mesh.num_nodes(), 4);
/// assert_eq!(mesh.column(mesh.node(a)).count(), 2);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    nodes: Vec<Node>,
    elements: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no node below it and returns its id.
    pub fn add_node(&mut self, lon: Real, lat: Real, depth: Real) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(Node::new(id, lon, lat, depth));
        id
    }

    /// Adds a node at the same horizontal position as `above`, at the given
    /// depth, links it below `above`, and returns its id.
    ///
    /// The new node inherits the cavity and coastal flags of `above`.
    ///
    /// # Panics
    ///
    /// Panics if `above` is not a node of this builder.
    pub fn add_node_below(&mut self, above: u32, depth: Real) -> u32 {
        let parent = self.nodes[above as usize];
        let id = self.add_node(parent.lon, parent.lat, depth);
        self.nodes[id as usize].cavity = parent.cavity;
        self.nodes[id as usize].coastal = parent.coastal;
        self.nodes[above as usize].below = Some(id);
        id
    }

    /// Adds a column of nodes below `surface`, one per given depth, and
    /// returns the id of the deepest node.
    pub fn add_column_below(&mut self, surface: u32, depths: &[Real]) -> u32 {
        depths
            .iter()
            .fold(surface, |above, depth| self.add_node_below(above, *depth))
    }

    /// Links `below` under `above`. The link is validated by [`Self::build`].
    ///
    /// # Panics
    ///
    /// Panics if `above` is not a node of this builder.
    pub fn set_below(&mut self, above: u32, below: u32) {
        self.nodes[above as usize].below = Some(below);
    }

    /// Flags the node `id` as lying (or not) in an ice-shelf cavity.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this builder.
    pub fn set_cavity(&mut self, id: u32, cavity: bool) {
        self.nodes[id as usize].cavity = cavity;
    }

    /// Flags the node `id` as lying (or not) on the coastline.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this builder.
    pub fn set_coastal(&mut self, id: u32, coastal: bool) {
        self.nodes[id as usize].coastal = coastal;
    }

    /// Adds a surface element and returns its index.
    pub fn add_element(&mut self, corners: [u32; 3]) -> u32 {
        self.elements.push(corners);
        self.elements.len() as u32 - 1
    }

    /// Validates the accumulated nodes and elements and builds the mesh.
    pub fn build(self) -> Result<Mesh, MeshBuilderError> {
        Mesh::new(self.nodes, self.elements)
    }
}
