use std::collections::BTreeMap;

use serde::Deserialize;

/// Deserialization shape for one source-code's conversion record within a
/// target version's changelog. `operations` holds the raw operation-kind
/// tokens (e.g. `"ChangeCode"`, `"Merge"`); `vista-sdk-versioning` is
/// responsible for interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GmodVersioningNodeChangeDto {
    pub operations: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub old_assignment: Option<String>,
    #[serde(default)]
    pub new_assignment: Option<String>,
    #[serde(default)]
    pub delete_assignment: Option<bool>,
}

/// Deserialization shape for one target version's full changelog: every
/// source code that changes when converting into this version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GmodVersioningAssignmentChangeDto {
    #[serde(flatten)]
    pub entries: BTreeMap<String, GmodVersioningNodeChangeDto>,
}

/// Deserialization shape for the whole cross-version changelog: target VIS
/// version string (e.g. `"vis-3-7a"`) mapped to that version's changelog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GmodVersioningDto {
    #[serde(flatten)]
    pub items: BTreeMap<String, GmodVersioningAssignmentChangeDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_changelog_for_one_target_version() {
        let json = r#"{
            "vis-3-7a": {
                "411.1": {
                    "operations": ["ChangeCode"],
                    "source": "411.1",
                    "target": "411.2"
                }
            }
        }"#;
        let dto: GmodVersioningDto = serde_json::from_str(json).unwrap();
        let change = dto
            .items
            .get("vis-3-7a")
            .and_then(|c| c.entries.get("411.1"))
            .unwrap();
        assert_eq!(change.operations, vec!["ChangeCode".to_string()]);
        assert_eq!(change.target.as_deref(), Some("411.2"));
    }

    #[test]
    fn delete_assignment_defaults_to_none() {
        let json = r#"{
            "vis-3-5a": {
                "C101.31": { "operations": ["AssignmentDelete"] }
            }
        }"#;
        let dto: GmodVersioningDto = serde_json::from_str(json).unwrap();
        let change = dto
            .items
            .get("vis-3-5a")
            .and_then(|c| c.entries.get("C101.31"))
            .unwrap();
        assert_eq!(change.delete_assignment, None);
    }
}
