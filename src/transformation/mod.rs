//! Construction of zonal cross-sections from a mesh and a field.

pub use self::side_columns::{coincident_column, coincident_columns, interpolated_column, EdgeCrossing};
pub use self::sidegrid::build_sidegrid;
pub use self::slice_error::SliceError;
pub use self::slice_parameters::SliceParameters;

mod side_columns;
mod sidegrid;
mod slice_error;
mod slice_parameters;
