use crate::math::Real;
use crate::transformation::SliceError;

/// Parameters of a zonal cross-section.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceParameters {
    /// The longitude of the slice, in degrees.
    pub lon0: Real,
    /// Elements with no corner at or south of this latitude are skipped.
    pub lat_max: Real,
    /// Elements with no corner at or north of this latitude are skipped.
    pub lat_min: Real,
    /// Slice an edge lying exactly on the meridian only once, even when it is
    /// shared by two elements.
    pub merge_shared_edges: bool,
}

impl Default for SliceParameters {
    fn default() -> Self {
        Self {
            lon0: 0.0,
            lat_max: -50.0,
            lat_min: -90.0,
            merge_shared_edges: false,
        }
    }
}

impl SliceParameters {
    /// Slices at `lon0`, keeping elements from the South Pole up to `lat_max`.
    pub fn new(lon0: Real, lat_max: Real) -> Self {
        Self {
            lon0,
            lat_max,
            ..Self::default()
        }
    }

    /// Sets the southern bound of the latitude window.
    pub fn with_lat_min(mut self, lat_min: Real) -> Self {
        self.lat_min = lat_min;
        self
    }

    /// Enables or disables the merging of edges shared by two elements.
    pub fn with_merged_shared_edges(mut self, merge: bool) -> Self {
        self.merge_shared_edges = merge;
        self
    }

    /// Checks that the latitude window is not empty.
    pub fn validate(&self) -> Result<(), SliceError> {
        if self.lat_min <= self.lat_max {
            Ok(())
        } else {
            Err(SliceError::InvalidLatitudeWindow {
                lat_min: self.lat_min,
                lat_max: self.lat_max,
            })
        }
    }
}
