use crate::field::FieldValue;
use crate::math::Real;

/// A point of the zonal cross-section.
///
/// Side nodes are either interpolated along a mesh edge crossing the slicing
/// longitude, or copied from a mesh node lying exactly on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideNode {
    /// Longitude, in degrees.
    pub lon: Real,
    /// Latitude, in degrees.
    pub lat: Real,
    /// Depth, in metres, positive downward.
    pub depth: Real,
    /// The value of the sliced field at this point.
    pub var: FieldValue,
}

impl SideNode {
    /// Creates a side node.
    #[inline]
    pub fn new(lon: Real, lat: Real, depth: Real, var: FieldValue) -> Self {
        Self {
            lon,
            lat,
            depth,
            var,
        }
    }
}

/// The address of a [`SideNode`] in a [`SideGrid`](crate::shape::SideGrid):
/// its column, and its layer counted from the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideNodeId {
    /// The column this node belongs to.
    pub column: u32,
    /// The layer of this node, 0 at the surface.
    pub layer: u32,
}

impl SideNodeId {
    /// Creates a side node identifier.
    #[inline]
    pub fn new(column: u32, layer: u32) -> Self {
        Self { column, layer }
    }

    /// The identifier one layer down in the same column. That node may not
    /// exist, see [`SideGrid::below`](crate::shape::SideGrid::below).
    #[inline]
    pub fn next_layer(self) -> Self {
        Self::new(self.column, self.layer + 1)
    }
}

/// The chain of side nodes below one intersection point, from the surface
/// down to the shallower of the two mesh columns it was built from.
///
/// Layer `i + 1` is the node below layer `i`. A column is never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideColumn {
    nodes: Vec<SideNode>,
}

impl SideColumn {
    /// Starts a column at its surface node.
    pub fn new(surface: SideNode) -> Self {
        Self {
            nodes: vec![surface],
        }
    }

    /// Appends `node` below the current bottom of this column.
    #[inline]
    pub fn push(&mut self, node: SideNode) {
        self.nodes.push(node)
    }

    /// The node at the top of this column.
    #[inline]
    pub fn surface(&self) -> &SideNode {
        &self.nodes[0]
    }

    /// The node at the given layer, if this column reaches that deep.
    #[inline]
    pub fn get(&self, layer: u32) -> Option<&SideNode> {
        self.nodes.get(layer as usize)
    }

    /// All the nodes of this column, from top to bottom.
    #[inline]
    pub fn nodes(&self) -> &[SideNode] {
        &self.nodes
    }

    /// The number of layers of this column.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, columns start with their surface node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
