use std::collections::{BTreeMap, HashSet};

use vista_sdk_location::Location;

/// One node in a [`crate::Gmod`] catalog DAG.
///
/// Children and parents are stored as codes rather than owned substructures
/// — a node can sit under more than one parent, so the catalog itself owns
/// every node and nodes only reference each other by code. See
/// [`crate::Gmod::node`] to resolve a code back to its node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmodNode {
    code: String,
    category: String,
    node_type: String,
    name: String,
    common_name: Option<String>,
    definition: Option<String>,
    common_definition: Option<String>,
    install_substructure: Option<bool>,
    normal_assignment_names: BTreeMap<String, String>,
    location: Option<Location>,
    children: Vec<String>,
    parents: Vec<String>,
    child_set: HashSet<String>,
}

impl GmodNode {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        code: String,
        category: String,
        node_type: String,
        name: String,
        common_name: Option<String>,
        definition: Option<String>,
        common_definition: Option<String>,
        install_substructure: Option<bool>,
        normal_assignment_names: BTreeMap<String, String>,
    ) -> Self {
        Self {
            code,
            category,
            node_type,
            name,
            common_name,
            definition,
            common_definition,
            install_substructure,
            normal_assignment_names,
            location: None,
            children: Vec::new(),
            parents: Vec::new(),
            child_set: HashSet::new(),
        }
    }

    pub(crate) fn add_child(&mut self, code: String) {
        self.child_set.insert(code.clone());
        self.children.push(code);
    }

    pub(crate) fn add_parent(&mut self, code: String) {
        self.parents.push(code);
    }

    pub(crate) fn trim(&mut self) {
        self.children.shrink_to_fit();
        self.parents.shrink_to_fit();
        self.child_set.shrink_to_fit();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn common_definition(&self) -> Option<&str> {
        self.common_definition.as_deref()
    }

    pub fn install_substructure(&self) -> Option<bool> {
        self.install_substructure
    }

    pub fn normal_assignment_names(&self) -> &BTreeMap<String, String> {
        &self.normal_assignment_names
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn is_child(&self, code: &str) -> bool {
        self.child_set.contains(code)
    }

    /// `"{category} {type}"`, e.g. `"ASSET FUNCTION LEAF"`.
    pub fn full_type(&self) -> String {
        if self.node_type.is_empty() {
            self.category.clone()
        } else {
            format!("{} {}", self.category, self.node_type)
        }
    }

    pub fn is_product_type(&self) -> bool {
        self.category == "PRODUCT" && self.node_type == "TYPE"
    }

    pub fn is_product_selection(&self) -> bool {
        self.category == "PRODUCT" && self.node_type == "SELECTION"
    }

    pub fn is_asset(&self) -> bool {
        self.category == "ASSET"
    }

    pub fn is_function_node(&self) -> bool {
        !self.is_asset() && self.category != "PRODUCT"
    }

    pub fn is_asset_function_node(&self) -> bool {
        self.category == "ASSET FUNCTION"
    }

    pub fn is_leaf_node(&self) -> bool {
        matches!(
            self.full_type().as_str(),
            "ASSET FUNCTION LEAF" | "PRODUCT FUNCTION LEAF"
        )
    }

    pub fn is_function_composition(&self) -> bool {
        matches!(self.category.as_str(), "ASSET FUNCTION" | "PRODUCT FUNCTION")
            && self.node_type == "COMPOSITION"
    }

    /// Whether this node may carry its own [`Location`], independent of a
    /// location already fixed elsewhere on its path.
    ///
    /// `is_target` marks the terminal node of the path being resolved;
    /// `is_in_set` marks membership in an already-open individualizable
    /// span (see [`crate::GmodPath::individualizable_sets`]).
    pub fn is_individualizable(&self, is_target: bool, is_in_set: bool) -> bool {
        if self.code == vista_sdk_core::GMOD_ROOT_CODE {
            return false;
        }
        if matches!(self.node_type.as_str(), "GROUP" | "SELECTION") || self.is_product_type() {
            return false;
        }
        if self.is_asset() && self.node_type == "TYPE" {
            return false;
        }
        if self.is_function_composition() {
            return self.code.ends_with('i') || is_in_set || is_target;
        }
        true
    }

    pub fn with_location(&self, location: Location) -> Self {
        let mut clone = self.clone();
        clone.location = Some(location);
        clone
    }

    pub fn without_location(&self) -> Self {
        let mut clone = self.clone();
        clone.location = None;
        clone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> GmodNode {
        GmodNode::new(
            "411i".to_string(),
            "ASSET FUNCTION".to_string(),
            "LEAF".to_string(),
            "Leaf node".to_string(),
            None,
            None,
            None,
            None,
            BTreeMap::new(),
        )
    }

    #[test]
    fn full_type_joins_category_and_type() {
        assert_eq!(leaf().full_type(), "ASSET FUNCTION LEAF");
    }

    #[test]
    fn classification_predicates() {
        let node = leaf();
        assert!(node.is_function_node());
        assert!(node.is_asset_function_node());
        assert!(node.is_leaf_node());
        assert!(!node.is_product_type());
        assert!(!node.is_asset());
    }

    #[test]
    fn children_tracked_via_child_set() {
        let mut node = leaf();
        node.add_child("412".to_string());
        assert!(node.is_child("412"));
        assert!(!node.is_child("413"));
        assert_eq!(node.children(), &["412".to_string()]);
    }

    #[test]
    fn with_and_without_location_round_trip() {
        let node = leaf();
        assert!(node.location().is_none());
        let loc = vista_sdk_location::Locations::new(vista_sdk_dto::LocationsDto {
            vis_release: "3-4a".to_string(),
            items: vec![vista_sdk_dto::RelativeLocationDto {
                code: '1',
                name: "one".to_string(),
                definition: None,
                group: "Numeric".to_string(),
            }],
        })
        .parse("1")
        .unwrap();
        let with = node.with_location(loc);
        assert!(with.location().is_some());
        let without = with.without_location();
        assert!(without.location().is_none());
    }

    #[test]
    fn function_composition_individualizable_only_when_i_suffixed_or_in_context() {
        let mut composition = leaf();
        composition.node_type = "COMPOSITION".to_string();
        composition.code = "800".to_string();
        assert!(!composition.is_individualizable(false, false));
        assert!(composition.is_individualizable(true, false));

        let mut i_suffixed = composition.clone();
        i_suffixed.code = "800i".to_string();
        assert!(i_suffixed.is_individualizable(false, false));
    }
}
