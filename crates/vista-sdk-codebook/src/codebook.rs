use std::collections::{BTreeMap, BTreeSet};

use vista_sdk_core::{strings, CodebookKind, MetadataTag, DEFAULT_GROUP, NUMBER_PLACEHOLDER};
use vista_sdk_dto::CodebookDto;

use crate::position::PositionValidationResult;

/// One controlled vocabulary: the value-to-group map, the set of groups,
/// and the set of standard values, for a single [`CodebookKind`].
#[derive(Debug, Clone)]
pub struct Codebook {
    kind: CodebookKind,
    value_groups: BTreeMap<String, String>,
    groups: BTreeSet<String>,
    standard_values: BTreeSet<String>,
    accepts_number: bool,
}

impl Codebook {
    pub fn new(kind: CodebookKind, dto: CodebookDto) -> Self {
        let mut value_groups = BTreeMap::new();
        let mut groups = BTreeSet::new();
        let mut standard_values = BTreeSet::new();
        let mut accepts_number = false;

        for (group, values) in dto.values {
            if group != NUMBER_PLACEHOLDER {
                groups.insert(group.clone());
            }
            for value in values {
                if value == NUMBER_PLACEHOLDER {
                    accepts_number = true;
                    continue;
                }
                standard_values.insert(value.clone());
                value_groups.insert(value, group.clone());
            }
        }

        Self {
            kind,
            value_groups,
            groups,
            standard_values,
            accepts_number,
        }
    }

    pub fn kind(&self) -> CodebookKind {
        self.kind
    }

    /// The groups this codebook's values are partitioned into, excluding
    /// the synthetic `<number>` placeholder.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    pub fn standard_values(&self) -> impl Iterator<Item = &str> {
        self.standard_values.iter().map(String::as_str)
    }

    pub fn group_of(&self, value: &str) -> Option<&str> {
        self.value_groups.get(value).map(String::as_str)
    }

    /// True for a known standard value, or (when this codebook accepts a
    /// `<number>` placeholder entry) any non-empty all-digit string.
    pub fn is_standard_value(&self, value: &str) -> bool {
        self.standard_values.contains(value)
            || (self.accepts_number
                && !value.is_empty()
                && value.chars().all(|c| c.is_ascii_digit()))
    }

    /// Builds a [`MetadataTag`] for `value`, or rejects it, per §4.2:
    /// `Position` uses structural validation, `Detail` always allows a
    /// custom value, and every other kind falls back to a standard-value
    /// lookup.
    pub fn create_tag(&self, value: &str) -> Option<MetadataTag> {
        if value.is_empty() {
            return None;
        }
        match self.kind {
            CodebookKind::Position => match self.validate_position(value) {
                PositionValidationResult::Valid => {
                    Some(MetadataTag::new(self.kind, value, false))
                }
                PositionValidationResult::ValidCustom => {
                    Some(MetadataTag::new(self.kind, value, true))
                }
                _ => None,
            },
            CodebookKind::Detail => {
                if strings::is_uri_unreserved_str(value) {
                    Some(MetadataTag::new(self.kind, value, true))
                } else {
                    None
                }
            }
            _ => {
                if !strings::is_uri_unreserved_str(value) {
                    return None;
                }
                let is_custom = !self.is_standard_value(value);
                Some(MetadataTag::new(self.kind, value, is_custom))
            }
        }
    }

    /// The four-phase `Position` validation pipeline described in §3/§4.2.
    pub fn validate_position(&self, value: &str) -> PositionValidationResult {
        if value.trim() != value
            || !strings::has_no_whitespace(value)
            || !strings::is_uri_unreserved_str(value)
        {
            return PositionValidationResult::Invalid;
        }
        self.validate_part(value)
    }

    fn validate_part(&self, value: &str) -> PositionValidationResult {
        if self.standard_values.contains(value) {
            return PositionValidationResult::Valid;
        }
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            return PositionValidationResult::Valid;
        }
        if !value.contains('-') {
            return PositionValidationResult::ValidCustom;
        }

        let parts: Vec<&str> = value.split('-').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return PositionValidationResult::Invalid;
        }

        let part_results: Vec<PositionValidationResult> =
            parts.iter().map(|p| self.validate_part(p)).collect();
        if part_results
            .iter()
            .any(|r| !matches!(r, PositionValidationResult::Valid | PositionValidationResult::ValidCustom))
        {
            return PositionValidationResult::Invalid;
        }

        let digit_positions: Vec<usize> = parts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.chars().all(|c| c.is_ascii_digit()))
            .map(|(i, _)| i)
            .collect();
        if digit_positions.len() > 1 || digit_positions.iter().any(|&i| i != parts.len() - 1) {
            return PositionValidationResult::InvalidOrder;
        }

        let non_digit_parts: Vec<&str> = parts
            .iter()
            .copied()
            .filter(|p| !p.chars().all(|c| c.is_ascii_digit()))
            .collect();
        let mut sorted = non_digit_parts.clone();
        sorted.sort_unstable();
        if non_digit_parts != sorted {
            return PositionValidationResult::InvalidOrder;
        }

        if part_results.iter().all(|r| matches!(r, PositionValidationResult::Valid)) {
            let mut seen_groups: Vec<&str> = Vec::new();
            for part in &non_digit_parts {
                if let Some(group) = self.group_of(part) {
                    if group == DEFAULT_GROUP {
                        continue;
                    }
                    if seen_groups.contains(&group) {
                        return PositionValidationResult::InvalidGrouping;
                    }
                    seen_groups.push(group);
                }
            }
        }

        PositionValidationResult::ValidCustom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn quantity_fixture() -> Codebook {
        let mut values = BTreeMap::new();
        values.insert(
            "Temperature".to_string(),
            vec!["temperature".to_string()],
        );
        values.insert("Pressure".to_string(), vec!["pressure".to_string()]);
        Codebook::new(
            CodebookKind::Quantity,
            CodebookDto {
                name: "Quantity".to_string(),
                values,
            },
        )
    }

    fn position_fixture() -> Codebook {
        let mut values = BTreeMap::new();
        values.insert(
            "Vertical".to_string(),
            vec!["upper".to_string(), "lower".to_string()],
        );
        values.insert(
            "Longitudinal".to_string(),
            vec!["forward".to_string(), "aft".to_string()],
        );
        values.insert(
            "Numeric".to_string(),
            vec![NUMBER_PLACEHOLDER.to_string()],
        );
        Codebook::new(
            CodebookKind::Position,
            CodebookDto {
                name: "Position".to_string(),
                values,
            },
        )
    }

    #[test]
    fn standard_value_creates_non_custom_tag() {
        let tag = quantity_fixture().create_tag("temperature").unwrap();
        assert!(!tag.is_custom());
        assert_eq!(tag.value(), "temperature");
    }

    #[test]
    fn unknown_value_creates_custom_tag_for_non_position_kinds() {
        let tag = quantity_fixture().create_tag("my-custom-reading").unwrap();
        assert!(tag.is_custom());
    }

    #[test]
    fn rejects_non_uri_value() {
        assert!(quantity_fixture().create_tag("bad value").is_none());
    }

    #[test_case("upper", PositionValidationResult::Valid; "standard value")]
    #[test_case("3", PositionValidationResult::Valid; "all digits")]
    #[test_case("mystery", PositionValidationResult::ValidCustom; "unknown single token")]
    #[test_case("aft-upper", PositionValidationResult::ValidCustom; "two valid parts different groups")]
    #[test_case("upper-lower", PositionValidationResult::InvalidGrouping; "same group twice")]
    #[test_case("upper-aft", PositionValidationResult::InvalidOrder; "parts out of alphabetical order")]
    #[test_case("upper-3", PositionValidationResult::ValidCustom; "trailing digit run allowed")]
    #[test_case("3-upper", PositionValidationResult::InvalidOrder; "leading digit run not allowed")]
    #[test_case("upper-", PositionValidationResult::Invalid; "empty trailing part")]
    #[test_case(" upper", PositionValidationResult::Invalid; "leading whitespace")]
    fn position_pipeline(value: &str, expected: PositionValidationResult) {
        assert_eq!(position_fixture().validate_position(value), expected);
    }

    #[test]
    fn position_create_tag_accepts_valid_and_valid_custom() {
        let codebook = position_fixture();
        assert!(codebook.create_tag("upper").unwrap().is_custom() == false);
        assert!(codebook.create_tag("aft-upper").unwrap().is_custom());
        assert!(codebook.create_tag("upper-lower").is_none());
    }

    #[test]
    fn detail_always_accepts_uri_unreserved_value() {
        let codebook = Codebook::new(
            CodebookKind::Detail,
            CodebookDto {
                name: "Detail".to_string(),
                values: BTreeMap::new(),
            },
        );
        let tag = codebook.create_tag("anything_goes").unwrap();
        assert!(tag.is_custom());
    }
}
