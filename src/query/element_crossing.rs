/// How the surface triangle of a mesh element meets the slicing meridian.
///
/// All indices are corner indices (`0`, `1` or `2`) into the element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementCrossing {
    /// The element lies outside of the latitude window, or entirely on one
    /// side of the meridian.
    Outside,
    /// Exactly one corner lies on the meridian and the rest of the element is
    /// on one side of it. The element contributes nothing to the slice.
    Touch {
        /// The corner lying on the meridian.
        corner: usize,
    },
    /// Exactly one corner lies on the meridian and the opposite edge crosses it.
    Vertex {
        /// The corner lying on the meridian.
        corner: usize,
        /// The endpoints of the opposite edge.
        opposite: [usize; 2],
    },
    /// Two corners lie on the meridian, so one whole edge belongs to the slice.
    Edge {
        /// The two corners lying on the meridian, in element order.
        corners: [usize; 2],
    },
    /// No corner lies on the meridian and two edges cross it.
    Regular {
        /// The crossing edges, in the order `0-1`, `1-2`, `0-2`.
        edges: [[usize; 2]; 2],
    },
}

impl ElementCrossing {
    /// Does this crossing contribute a pair of columns to the slice?
    #[inline]
    pub fn contributes(&self) -> bool {
        matches!(
            self,
            Self::Vertex { .. } | Self::Edge { .. } | Self::Regular { .. }
        )
    }
}
