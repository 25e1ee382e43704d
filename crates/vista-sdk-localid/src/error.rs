/// Errors returned by [`crate::LocalIdBuilder::build`].
///
/// Parse-time diagnostics accumulate in a [`vista_sdk_core::ParsingErrors`]
/// instead — these variants only cover the fail-fast preconditions of
/// turning a builder into an immutable [`crate::LocalId`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LocalIdError {
    #[error("a LocalId requires a VIS version")]
    MissingVersion,

    #[error("a LocalId requires a primary item path")]
    MissingPrimaryItem,

    #[error("a LocalId requires at least one metadata tag")]
    MissingTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_descriptive() {
        assert_eq!(
            LocalIdError::MissingVersion.to_string(),
            "a LocalId requires a VIS version"
        );
    }
}
