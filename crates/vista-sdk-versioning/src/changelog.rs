use std::collections::BTreeMap;

use vista_sdk_core::VisVersion;
use vista_sdk_dto::{GmodVersioningAssignmentChangeDto, GmodVersioningNodeChangeDto};

/// One source code's recorded change on the way to a changelog's target
/// version: a renamed code, an assignment change, or a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub operations: Vec<String>,
    pub target_code: Option<String>,
    pub old_assignment: Option<String>,
    pub new_assignment: Option<String>,
    pub delete_assignment: Option<bool>,
}

impl From<GmodVersioningNodeChangeDto> for ChangelogEntry {
    fn from(dto: GmodVersioningNodeChangeDto) -> Self {
        Self {
            operations: dto.operations,
            target_code: dto.target,
            old_assignment: dto.old_assignment,
            new_assignment: dto.new_assignment,
            delete_assignment: dto.delete_assignment,
        }
    }
}

/// The set of node changes needed to step from the previous VIS version to
/// `target_version`, keyed by the source code they apply to.
#[derive(Debug, Clone)]
pub struct VersioningChangelog {
    target_version: VisVersion,
    entries: BTreeMap<String, ChangelogEntry>,
}

impl VersioningChangelog {
    pub fn new(target_version: VisVersion, dto: GmodVersioningAssignmentChangeDto) -> Self {
        let entries = dto
            .entries
            .into_iter()
            .map(|(code, change)| (code, ChangelogEntry::from(change)))
            .collect();
        Self {
            target_version,
            entries,
        }
    }

    pub fn target_version(&self) -> VisVersion {
        self.target_version
    }

    pub fn entry(&self, source_code: &str) -> Option<&ChangelogEntry> {
        self.entries.get(source_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    #[test]
    fn looks_up_entry_by_source_code() {
        let mut entries = Map::new();
        entries.insert(
            "411".to_string(),
            GmodVersioningNodeChangeDto {
                operations: vec!["rename".to_string()],
                source: Some("411".to_string()),
                target: Some("412".to_string()),
                old_assignment: None,
                new_assignment: None,
                delete_assignment: None,
            },
        );
        let changelog = VersioningChangelog::new(
            VisVersion::V3_5a,
            GmodVersioningAssignmentChangeDto { entries },
        );
        assert_eq!(changelog.entry("411").unwrap().target_code.as_deref(), Some("412"));
        assert!(changelog.entry("999").is_none());
    }
}
