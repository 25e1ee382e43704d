use thiserror::Error;

/// Fail-fast errors for GMOD catalog construction and path assembly.
///
/// Parse-style diagnostics (unknown code, bad location, ambiguous parent
/// chain) accumulate in a [`vista_sdk_core::ParsingErrors`] instead — these
/// variants are for the structural failures a caller cannot recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GmodError {
    #[error("relation references unknown code '{0}'")]
    UnknownRelationCode(String),

    #[error("catalog has no root node (code '{0}')")]
    MissingRoot(String),

    #[error("'{0}' is not a child of '{1}'")]
    NotAChild(String, String),

    #[error("path's first parent must be the root, got '{0}'")]
    NotRooted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_code() {
        let err = GmodError::UnknownRelationCode("ZZZZ".to_string());
        assert_eq!(err.to_string(), "relation references unknown code 'ZZZZ'");
    }
}
