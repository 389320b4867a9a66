//! Model output sampled at the mesh nodes.
//!
//! A [`FieldData`] is either one snapshot (one value per node) or a
//! timeseries (one row of node values per time index). Every value read
//! from it is a [`FieldValue`], which carries the same rank so that the
//! slicing code runs a single code path for both cases.

pub use self::field_data::{FieldData, FieldError, FieldRank};
pub use self::field_value::FieldValue;

mod field_data;
mod field_value;
