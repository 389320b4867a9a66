//! Queries locating mesh elements relative to a slicing meridian.
//!
//! The main entry point is [`classify_element`], which tells how (and
//! whether) the surface triangle of a mesh element is crossed by the meridian
//! `lon = lon0` inside a latitude window.

pub use self::classify_element::classify_element;
pub use self::element_crossing::ElementCrossing;
pub use self::geometry_issue::GeometryIssue;

mod classify_element;
mod element_crossing;
mod geometry_issue;
