//! LocalId: the `dnv-v2` composite identifier naming rule.
//!
//! A [`LocalId`] pairs a [`vista_sdk_core::VisVersion`] with a primary (and
//! optional secondary) [`vista_sdk_gmod::GmodPath`] and an ordered set of
//! [`vista_sdk_core::MetadataTag`]s. [`LocalIdBuilder`] builds one through
//! immutable `with_*` calls or by parsing the canonical string form.

mod builder;
mod error;
mod local_id;
mod tag_token;

pub use builder::LocalIdBuilder;
pub use error::LocalIdError;
pub use local_id::LocalId;
