//! Ice-shelf diagnostics computed on the mesh: cavity surface means, front
//! contours, and volume averages over the ice-shelf fronts.

pub use self::cavity::{cavity_surface_means, front_contour_segments};
pub use self::front_average::{FrontAccumulator, FrontTimeseries, TsAverage};
pub use self::ice_shelf_region::{IceShelfRegion, LonLatBox};

mod cavity;
mod front_average;
mod ice_shelf_region;
