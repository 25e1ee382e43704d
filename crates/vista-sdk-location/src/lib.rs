//! Relative-location values and the per-version table that validates them.
//!
//! A [`Location`] is a spatial qualifier string such as `"2"`, `"P"`, or
//! `"11FI"`: an optional leading number followed by up to one letter from
//! each of four disjoint groups (Side, Vertical, Transverse, Longitudinal).
//! [`Locations`] holds the table of known letters for one VIS version and
//! is the only way to parse a `Location`.

mod location;
mod locations;

pub use location::Location;
pub use locations::{Locations, RelativeLocationEntry};
