//! Controlled vocabularies for LocalId metadata tags.
//!
//! A [`Codebook`] holds one kind's standard values and groups; [`Codebooks`]
//! is the full per-version set, keyed by [`vista_sdk_core::CodebookKind`].
//! `Position` is the one kind with a structural grammar instead of a flat
//! standard-value lookup — see [`PositionValidationResult`].

mod codebook;
mod codebooks;
mod position;

pub use codebook::Codebook;
pub use codebooks::Codebooks;
pub use position::PositionValidationResult;
