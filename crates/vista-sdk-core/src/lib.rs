//! Shared VIS/GMOD primitive types.
//!
//! This crate defines the core value types used across the Vista SDK: the
//! closed set of known VIS releases, the codebook-kind enum, the metadata
//! tag value type, the parse-diagnostic accumulator, and the fail-fast
//! error taxonomy. Every other crate in the workspace depends on it without
//! pulling in parsing or graph logic.
//!
//! # Types
//!
//! - [`VisVersion`] — a closed, totally ordered enum of known VIS releases
//! - [`CodebookKind`] — which controlled vocabulary a metadata value belongs to
//! - [`MetadataTag`] — a `(kind, value, is_custom)` triple with its textual form
//! - [`ParsingErrors`] / [`ParsingError`] — ordered diagnostic accumulator
//! - [`VistaError`] — fail-fast error taxonomy for non-parsing operations

mod codebook_kind;
mod constants;
mod error;
mod metadata_tag;
mod parsing_errors;
mod version;

pub mod strings;

pub use codebook_kind::{CodebookKind, METADATA_TAG_ORDER};
pub use constants::{
    DEFAULT_GROUP, GMOD_ROOT_CODE, META_TOKEN, NAMING_RULE, NUMBER_PLACEHOLDER,
    SECONDARY_ITEM_TOKEN, TAG_SEPARATOR_CUSTOM, TAG_SEPARATOR_STANDARD, VIS_VERSION_PREFIX,
};
pub use error::VistaError;
pub use metadata_tag::MetadataTag;
pub use parsing_errors::{ParsingError, ParsingErrors};
pub use version::{UnknownVisVersion, VisVersion};
