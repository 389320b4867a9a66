/// A mesh configuration the slicer cannot interpret.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryIssue {
    /// An element with no corner on the meridian was not crossed by exactly
    /// two of its edges.
    #[error("expected 2 edges crossing the meridian, found {0}")]
    CrossingCount(usize),
    /// The three corners of an element lie on the meridian.
    #[error("all three corners lie on the meridian")]
    AllCornersOnMeridian,
    /// The edge between these two nodes cannot be interpolated: its endpoints
    /// share the same longitude or the same position.
    #[error("the edge between nodes {0} and {1} is degenerate")]
    DegenerateEdge(u32, u32),
}
