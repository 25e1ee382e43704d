//! Cross-version GMOD conversion.
//!
//! A [`GmodVersioning`] holds the full cross-version changelog and converts
//! [`vista_sdk_gmod::GmodNode`]s, [`vista_sdk_gmod::GmodPath`]s, and
//! [`vista_sdk_localid::LocalId`]s one VIS version step at a time.

mod changelog;
mod error;
mod versioning;

pub use changelog::{ChangelogEntry, VersioningChangelog};
pub use error::VersioningError;
pub use versioning::GmodVersioning;
