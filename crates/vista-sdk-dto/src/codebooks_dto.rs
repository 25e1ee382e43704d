use std::collections::BTreeMap;

use serde::Deserialize;

/// Deserialization shape for one codebook: a group name mapped to the list
/// of values that belong to it (a `<number>` placeholder group entry
/// signals that numeric values are accepted standard values).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodebookDto {
    pub name: String,
    pub values: BTreeMap<String, Vec<String>>,
}

/// Deserialization shape for one VIS version's full set of codebooks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodebooksDto {
    pub vis_release: String,
    pub items: Vec<CodebookDto>,
}
