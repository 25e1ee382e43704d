use std::collections::BTreeMap;

use serde::Deserialize;

/// Deserialization shape for a single GMOD catalog node.
///
/// Mirrors the original SDK's `GmodNodeDto` (`cpp/src/SDK/dto/GmodDto.h`):
/// `category`/`type` classify the node, `normal_assignment_names` maps a
/// target code to the name it is normally assigned under this node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GmodNodeDto {
    pub category: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub common_definition: Option<String>,
    #[serde(default)]
    pub install_substructure: Option<bool>,
    #[serde(default)]
    pub normal_assignment_names: BTreeMap<String, String>,
}

/// Deserialization shape for one VIS version's full GMOD catalog: every
/// node description plus the `[parent_code, child_code]` edge list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GmodDto {
    pub vis_release: String,
    pub items: Vec<GmodNodeDto>,
    pub relations: Vec<[String; 2]>,
}
