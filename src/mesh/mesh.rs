use crate::math::{Point, Real, DEG_TO_RAD, EARTH_RADIUS};
use crate::mesh::MeshBuilderError;
use crate::shape::Triangle;

/// A node of the 3D mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Node {
    /// Index of this node in the mesh, also its column in the field data.
    pub id: u32,
    /// Longitude, in degrees.
    pub lon: Real,
    /// Latitude, in degrees.
    pub lat: Real,
    /// Depth, in metres, positive downward.
    pub depth: Real,
    /// The node directly below this one in the same water column, if any.
    pub below: Option<u32>,
    /// Whether this node lies beneath floating ice-shelf ice.
    pub cavity: bool,
    /// Whether this node lies on the coastline.
    pub coastal: bool,
}

impl Node {
    /// Creates an open-ocean node with no node below it.
    pub fn new(id: u32, lon: Real, lat: Real, depth: Real) -> Self {
        Self {
            id,
            lon,
            lat,
            depth,
            below: None,
            cavity: false,
            coastal: false,
        }
    }
}

/// The 3D FESOM mesh: nodes linked vertically, and surface triangles.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates a mesh from its nodes and surface triangles.
    ///
    /// The node at index `i` must have the id `i`. Element corners and
    /// `below` links must reference existing nodes, a node can be below at
    /// most one other node, and vertical chains must not loop.
    pub fn new(nodes: Vec<Node>, elements: Vec<[u32; 3]>) -> Result<Self, MeshBuilderError> {
        if elements.is_empty() {
            return Err(MeshBuilderError::EmptyElements);
        }

        let num_nodes = nodes.len() as u32;

        for (i, node) in nodes.iter().enumerate() {
            if node.id != i as u32 {
                return Err(MeshBuilderError::NodeIdMismatch {
                    index: i as u32,
                    id: node.id,
                });
            }
        }

        for (element, corners) in elements.iter().enumerate() {
            for &node in corners {
                if node >= num_nodes {
                    return Err(MeshBuilderError::InvalidNodeIndex {
                        element: element as u32,
                        node,
                    });
                }
            }
        }

        // Every node is below at most one node, so each column is a simple
        // chain starting at a node nothing points to.
        let mut has_above = vec![false; nodes.len()];

        for node in &nodes {
            if let Some(below) = node.below {
                if below >= num_nodes || below == node.id {
                    return Err(MeshBuilderError::InvalidBelowLink {
                        node: node.id,
                        below,
                    });
                }

                if has_above[below as usize] {
                    return Err(MeshBuilderError::SharedBelow { below });
                }

                has_above[below as usize] = true;
            }
        }

        let mut visited = vec![false; nodes.len()];

        for head in nodes.iter().filter(|n| !has_above[n.id as usize]) {
            let mut curr = Some(head.id);

            while let Some(id) = curr {
                visited[id as usize] = true;
                curr = nodes[id as usize].below;
            }
        }

        if let Some(node) = visited.iter().position(|v| !v) {
            return Err(MeshBuilderError::CyclicColumn { node: node as u32 });
        }

        Ok(Self { nodes, elements })
    }

    /// All the nodes of this mesh, indexed by id.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The number of nodes of this mesh.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this mesh.
    #[inline]
    pub fn node(&self, id: u32) -> &Node {
        &self.nodes[id as usize]
    }

    /// The node directly below `node`, if any.
    #[inline]
    pub fn below(&self, node: &Node) -> Option<&Node> {
        node.below.map(|id| &self.nodes[id as usize])
    }

    /// Iterates through `node` and every node below it, top to bottom.
    #[inline]
    pub fn column(&self, node: &Node) -> Column<'_> {
        Column {
            mesh: self,
            next: Some(&self.nodes[node.id as usize]),
        }
    }

    /// The number of surface elements of this mesh.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// The corner indices of every surface element.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.elements
    }

    /// The surface element with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not an element of this mesh.
    pub fn element(&self, i: u32) -> Element<'_> {
        let idx = self.elements[i as usize];
        Element {
            index: i,
            nodes: [
                &self.nodes[idx[0] as usize],
                &self.nodes[idx[1] as usize],
                &self.nodes[idx[2] as usize],
            ],
        }
    }

    /// Iterates through all the surface elements of this mesh.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = Element<'_>> + '_ {
        (0..self.elements.len() as u32).map(move |i| self.element(i))
    }
}

/// Iterator through a water column of the mesh, from top to bottom.
#[derive(Copy, Clone)]
pub struct Column<'a> {
    mesh: &'a Mesh,
    next: Option<&'a Node>,
}

impl<'a> Iterator for Column<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<&'a Node> {
        let curr = self.next?;
        self.next = self.mesh.below(curr);
        Some(curr)
    }
}

/// A surface triangle of the mesh, viewed through its three corner nodes.
#[derive(Copy, Clone, Debug)]
pub struct Element<'a> {
    index: u32,
    nodes: [&'a Node; 3],
}

impl<'a> Element<'a> {
    /// The index of this element in its mesh.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The three corner nodes of this element.
    #[inline]
    pub fn nodes(&self) -> [&'a Node; 3] {
        self.nodes
    }

    /// The longitude of each corner.
    #[inline]
    pub fn lon(&self) -> [Real; 3] {
        self.nodes.map(|n| n.lon)
    }

    /// The latitude of each corner.
    #[inline]
    pub fn lat(&self) -> [Real; 3] {
        self.nodes.map(|n| n.lat)
    }

    /// Which corners lie in an ice-shelf cavity.
    #[inline]
    pub fn cavity_nodes(&self) -> [bool; 3] {
        self.nodes.map(|n| n.cavity)
    }

    /// Which corners lie on the coastline.
    #[inline]
    pub fn coastal_nodes(&self) -> [bool; 3] {
        self.nodes.map(|n| n.coastal)
    }

    /// The number of corners lying in an ice-shelf cavity.
    #[inline]
    pub fn num_cavity_nodes(&self) -> usize {
        self.nodes.iter().filter(|n| n.cavity).count()
    }

    /// Whether this element lies entirely in an ice-shelf cavity.
    #[inline]
    pub fn is_cavity(&self) -> bool {
        self.num_cavity_nodes() == 3
    }

    /// Whether this element is part of an ice-shelf front, i.e., some but
    /// not all of its corners lie in a cavity.
    #[inline]
    pub fn is_front(&self) -> bool {
        matches!(self.num_cavity_nodes(), 1 | 2)
    }

    /// The horizontal area of this element, in square metres.
    ///
    /// The corners are projected onto the plane tangent to the sphere at the
    /// mean latitude of the element. Elements crossing the 180° meridian are
    /// not unwrapped.
    pub fn area(&self) -> Real {
        let mean_lat = self.lat().iter().sum::<Real>() / 3.0;
        let scale_y = EARTH_RADIUS * DEG_TO_RAD;
        let scale_x = scale_y * (mean_lat * DEG_TO_RAD).cos();
        let [a, b, c] = self
            .nodes
            .map(|n| Point::new(n.lon * scale_x, n.lat * scale_y));

        Triangle::new(a, b, c).area()
    }
}
