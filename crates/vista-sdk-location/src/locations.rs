use std::collections::BTreeMap;

use vista_sdk_core::{strings, ParsingErrors};
use vista_sdk_dto::{LocationsDto, RelativeLocationDto};

use crate::location::Location;

/// One entry of a version's relative-location table: a single letter code,
/// which of the four disjoint groups (Side, Vertical, Transverse,
/// Longitudinal) it belongs to, and its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeLocationEntry {
    pub code: char,
    pub name: String,
    pub definition: Option<String>,
    pub group: String,
}

impl From<RelativeLocationDto> for RelativeLocationEntry {
    fn from(dto: RelativeLocationDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            definition: dto.definition,
            group: dto.group,
        }
    }
}

/// The relative-location table for one VIS version.
///
/// Built once from a [`LocationsDto`] and shared by reference across every
/// `Location::parse` / `GmodPath::parse` call for that version, the same
/// way `Gmod` and `Codebooks` are cached per version.
#[derive(Debug, Clone)]
pub struct Locations {
    entries: BTreeMap<char, RelativeLocationEntry>,
}

impl Locations {
    pub fn new(dto: LocationsDto) -> Self {
        let entries = dto
            .items
            .into_iter()
            .map(|item| (item.code, RelativeLocationEntry::from(item)))
            .collect();
        Self { entries }
    }

    /// All known relative-location entries, in code order.
    pub fn entries(&self) -> impl Iterator<Item = &RelativeLocationEntry> {
        self.entries.values()
    }

    pub fn entry(&self, code: char) -> Option<&RelativeLocationEntry> {
        self.entries.get(&code)
    }

    pub fn group_of(&self, code: char) -> Option<&str> {
        self.entries.get(&code).map(|e| e.group.as_str())
    }

    /// Parses and validates a location string, returning the canonical
    /// [`Location`] or every diagnostic found.
    ///
    /// Grammar: an optional positive integer, followed by up to one
    /// character from each of the four disjoint groups, letters in
    /// strictly ascending order. See the original SDK's `Location.cpp`.
    pub fn parse(&self, value: &str) -> Result<Location, ParsingErrors> {
        let mut errors = ParsingErrors::new();

        if value.trim().is_empty() {
            errors.push("InvalidLocation", "value is empty or whitespace-only");
            return Err(errors);
        }
        if !strings::has_no_whitespace(value) {
            errors.push("InvalidLocation", "value contains whitespace");
        }
        if !strings::is_uri_unreserved_str(value) {
            errors.push(
                "InvalidLocation",
                "value contains a character outside the URI-unreserved set",
            );
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let digit_count = value.chars().take_while(char::is_ascii_digit).count();
        let (number, letters) = value.split_at(digit_count);

        if !number.is_empty() {
            if number.len() > 1 && number.starts_with('0') {
                errors.push("InvalidLocation", "number part has a leading zero");
            }
            if number.parse::<u32>().is_err() {
                errors.push(
                    "InvalidLocation",
                    "number part does not fit a positive integer",
                );
            }
        }

        if letters.chars().any(|c| c.is_ascii_digit()) {
            errors.push(
                "InvalidLocation",
                "digits may only appear as a single leading number",
            );
        }

        if !strings::is_strictly_ascending(letters) {
            errors.push(
                "InvalidOrder",
                "letter codes must appear in strictly ascending order",
            );
        }

        let mut seen_groups: Vec<&str> = Vec::new();
        for c in letters.chars() {
            match self.entries.get(&c) {
                None => {
                    errors.push(
                        "InvalidCode",
                        format!("'{c}' is not a known relative-location code"),
                    );
                }
                Some(entry) => {
                    if seen_groups.contains(&entry.group.as_str()) {
                        errors.push(
                            "InvalidGrouping",
                            format!("group '{}' is assigned more than once", entry.group),
                        );
                    } else {
                        seen_groups.push(entry.group.as_str());
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Location::new_unchecked(value.to_string()))
    }
}
