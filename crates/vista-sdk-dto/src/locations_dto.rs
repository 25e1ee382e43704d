use serde::Deserialize;

/// Deserialization shape for one relative-location letter entry: which of
/// the four disjoint groups (Side, Vertical, Transverse, Longitudinal) a
/// given letter belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelativeLocationDto {
    pub code: char,
    pub name: String,
    #[serde(default)]
    pub definition: Option<String>,
    pub group: String,
}

/// Deserialization shape for one VIS version's relative-locations table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationsDto {
    pub vis_release: String,
    pub items: Vec<RelativeLocationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_relative_location_entries() {
        let json = r#"{
            "vis_release": "3-4a",
            "items": [
                { "code": "P", "name": "Port", "group": "Side" },
                { "code": "F", "name": "Forward", "definition": "forward of midship", "group": "Longitudinal" }
            ]
        }"#;
        let dto: LocationsDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[0].code, 'P');
        assert_eq!(dto.items[0].group, "Side");
        assert_eq!(dto.items[1].definition.as_deref(), Some("forward of midship"));
    }
}
