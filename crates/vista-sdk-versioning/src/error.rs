use thiserror::Error;
use vista_sdk_core::VisVersion;
use vista_sdk_localid::LocalIdError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersioningError {
    #[error("source version {from} must be older than target version {to}")]
    DescendingConversion { from: VisVersion, to: VisVersion },

    #[error("'{0}' does not name a known VIS version")]
    UnknownVersion(String),

    #[error("no changelog registered for target version {0}")]
    MissingChangelog(VisVersion),

    #[error("location '{location}' rejected when converting node '{code}'")]
    LocationRejected { code: String, location: String },

    #[error("path reconstruction found no valid chain to the converted terminal node")]
    ReconstructionFailed,

    #[error("tried to remove the last asset-function node while reconstructing a converted path")]
    RemovedLastAssetFunctionNode,

    #[error("changelog deletes the assignment of terminal node '{code}'")]
    DeletedTerminalAssignment { code: String },

    #[error("converted nodes collapse onto '{code}' with conflicting locations")]
    ConflictingLocations { code: String },

    #[error("failed to rebuild LocalId after conversion: {0}")]
    LocalIdBuildFailed(#[from] LocalIdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_both_versions() {
        let err = VersioningError::DescendingConversion {
            from: VisVersion::V3_5a,
            to: VisVersion::V3_4a,
        };
        assert_eq!(
            err.to_string(),
            "source version 3-5a must be older than target version 3-4a"
        );
    }
}
