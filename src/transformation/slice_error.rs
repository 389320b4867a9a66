use crate::field::FieldError;
use crate::math::Real;
use crate::query::GeometryIssue;

/// Errors that abort the construction of a cross-section.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SliceError {
    /// A mesh element crossing the meridian cannot be sliced.
    #[error("element {element} cannot be sliced: {reason}")]
    InvalidGeometry {
        /// The offending element.
        element: u32,
        /// What is wrong with it.
        reason: GeometryIssue,
    },
    /// The field does not match the mesh.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// The latitude window of the slice is empty.
    #[error("empty latitude window: lat_min = {lat_min} is north of lat_max = {lat_max}")]
    InvalidLatitudeWindow {
        /// The requested southern bound.
        lat_min: Real,
        /// The requested northern bound.
        lat_max: Real,
    },
}

impl SliceError {
    /// Is this error caused by the mesh geometry?
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    /// The mesh element that caused this error, if any.
    pub fn element(&self) -> Option<u32> {
        match self {
            Self::InvalidGeometry { element, .. } => Some(*element),
            _ => None,
        }
    }
}
