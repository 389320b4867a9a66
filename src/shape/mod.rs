//! Shapes of the zonal cross-section, and the planar primitives they are
//! measured with.

pub use self::segment::Segment;
pub use self::side_element::SideElement;
pub use self::side_grid::SideGrid;
pub use self::side_node::{SideColumn, SideNode, SideNodeId};
pub use self::side_node_pair::SideNodePair;
pub use self::triangle::{Triangle, TriangleOrientation};

mod segment;
mod side_element;
mod side_grid;
mod side_node;
mod side_node_pair;
mod triangle;
