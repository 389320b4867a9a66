use crate::shape::SideNode;

/// The two columns bounding the intersection of one mesh element with the
/// slicing longitude, ordered south to north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SideNodePair {
    /// The column whose surface node lies further south.
    pub south: u32,
    /// The column whose surface node lies further north.
    pub north: u32,
}

impl SideNodePair {
    /// Pairs the columns `column1` and `column2`, given their surface nodes.
    ///
    /// `column1` is the southern one only if it is strictly further south;
    /// on ties `column2` is the southern one.
    pub fn new(column1: u32, surface1: &SideNode, column2: u32, surface2: &SideNode) -> Self {
        if surface1.lat < surface2.lat {
            Self {
                south: column1,
                north: column2,
            }
        } else {
            Self {
                south: column2,
                north: column1,
            }
        }
    }
}
