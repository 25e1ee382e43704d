use thiserror::Error;

/// Fail-fast error taxonomy for constructors and structural operations that
/// are not diagnostic-accumulating parsers (see [`crate::ParsingErrors`] for
/// those). Mirrors the original SDK's `Exceptions.h` categories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VistaError {
    /// Caller supplied ill-formed data (e.g. unknown VIS version).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced code or version is absent from the catalog.
    #[error("not found: {0}")]
    NotFound(String),

    /// More than one resolution is valid and none is preferred.
    #[error("ambiguous: {0}")]
    Ambiguous(String),

    /// The input parsed locally but violates a global structural invariant.
    #[error("structural violation: {0}")]
    Structural(String),

    /// A cross-version conversion cannot complete.
    #[error("conversion failed: {0}")]
    ConversionFailure(String),

    /// An operation's precondition was violated by the caller.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}
