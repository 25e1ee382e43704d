use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};
use vista_sdk_core::{VisVersion, GMOD_ROOT_CODE};
use vista_sdk_dto::GmodDto;

use crate::error::GmodError;
use crate::node::GmodNode;

/// What a [`Gmod::traverse`] handler tells the walk to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalControl {
    Continue,
    SkipSubtree,
    Stop,
}

/// Bounds on how a [`Gmod::traverse`] walk revisits re-entrant nodes.
#[derive(Debug, Clone, Copy)]
pub struct TraversalOptions {
    /// How many times the same node code may be visited before its subtree
    /// is pruned. The catalog is a DAG, not a tree, so without this a node
    /// reachable through multiple parents would be walked once per path.
    pub max_traversal_occurrences: usize,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            max_traversal_occurrences: 1,
        }
    }
}

/// One VIS version's full GMOD catalog: every node, keyed by code, plus the
/// parent/child edges between them.
#[derive(Debug, Clone)]
pub struct Gmod {
    version: VisVersion,
    nodes: HashMap<String, GmodNode>,
    root_code: String,
}

impl Gmod {
    /// Builds the catalog from its DTO form.
    ///
    /// 1. Insert every node, unlinked.
    /// 2. Walk `relations`, linking each `[parent, child]` pair both ways;
    ///    fail if either code is unknown.
    /// 3. Trim every node's edge storage to its final size.
    /// 4. Confirm the root node is present.
    pub fn new(version: VisVersion, dto: GmodDto) -> Result<Self, GmodError> {
        let mut nodes: HashMap<String, GmodNode> = HashMap::with_capacity(dto.items.len());
        for item in dto.items {
            let node = GmodNode::new(
                item.code.clone(),
                item.category,
                item.node_type,
                item.name,
                item.common_name,
                item.definition,
                item.common_definition,
                item.install_substructure,
                item.normal_assignment_names,
            );
            nodes.insert(item.code, node);
        }

        for [parent_code, child_code] in &dto.relations {
            if !nodes.contains_key(parent_code) {
                return Err(GmodError::UnknownRelationCode(parent_code.clone()));
            }
            if !nodes.contains_key(child_code) {
                return Err(GmodError::UnknownRelationCode(child_code.clone()));
            }
            nodes
                .get_mut(parent_code)
                .expect("checked above")
                .add_child(child_code.clone());
            nodes
                .get_mut(child_code)
                .expect("checked above")
                .add_parent(parent_code.clone());
        }

        for node in nodes.values_mut() {
            node.trim();
        }

        if !nodes.contains_key(GMOD_ROOT_CODE) {
            return Err(GmodError::MissingRoot(GMOD_ROOT_CODE.to_string()));
        }

        debug!(version = %version, node_count = nodes.len(), "constructed Gmod");

        Ok(Self {
            version,
            nodes,
            root_code: GMOD_ROOT_CODE.to_string(),
        })
    }

    pub fn version(&self) -> VisVersion {
        self.version
    }

    pub fn root(&self) -> &GmodNode {
        &self.nodes[&self.root_code]
    }

    pub fn node(&self, code: &str) -> Option<&GmodNode> {
        self.nodes.get(code)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_potential_parent(node_type: &str) -> bool {
        !matches!(node_type, "GROUP" | "SELECTION")
    }

    pub fn is_product_type_assignment(parent: &GmodNode, child: &GmodNode) -> bool {
        parent.is_function_node() && child.is_product_type()
    }

    pub fn is_product_selection_assignment(parent: &GmodNode, child: &GmodNode) -> bool {
        parent.is_function_node() && child.is_product_selection()
    }

    /// The single product-type child of `node`, if it has exactly one
    /// product-type-or-selection child and that child is a product type.
    pub fn product_type(&self, node: &GmodNode) -> Option<&GmodNode> {
        self.single_product_child(node, GmodNode::is_product_type)
    }

    /// As [`Gmod::product_type`] but for a product-selection child.
    pub fn product_selection(&self, node: &GmodNode) -> Option<&GmodNode> {
        self.single_product_child(node, GmodNode::is_product_selection)
    }

    fn single_product_child(
        &self,
        node: &GmodNode,
        want: impl Fn(&GmodNode) -> bool,
    ) -> Option<&GmodNode> {
        if !node.is_function_node() {
            return None;
        }
        let mut candidates = node
            .children()
            .iter()
            .filter_map(|code| self.nodes.get(code))
            .filter(|child| child.is_product_type() || child.is_product_selection());
        let only = candidates.next()?;
        if candidates.next().is_some() {
            return None;
        }
        want(only).then_some(only)
    }

    /// A function node is mappable if it isn't itself a product node or an
    /// asset, its code doesn't end in the asset/spare-part suffixes `a`/`s`,
    /// and none of its children are product-type or product-selection
    /// assignments.
    pub fn is_mappable(&self, node: &GmodNode) -> bool {
        if node.is_product_selection() || node.is_asset() {
            return false;
        }
        if node.code().ends_with('a') || node.code().ends_with('s') {
            return false;
        }
        !node.children().iter().any(|code| {
            self.nodes
                .get(code)
                .is_some_and(|child| child.is_product_type() || child.is_product_selection())
        })
    }

    /// Depth-first pre-order traversal from the root. `handler` receives the
    /// current parent stack and node, and returns how the walk should
    /// proceed; `state` is threaded through for accumulation.
    ///
    /// Returns `false` if the handler requested [`TraversalControl::Stop`],
    /// `true` if the whole catalog was walked (or pruned via
    /// `max_traversal_occurrences`).
    pub fn traverse<S>(
        &self,
        state: &mut S,
        options: TraversalOptions,
        mut handler: impl FnMut(&[&GmodNode], &GmodNode, &mut S) -> TraversalControl,
    ) -> bool {
        let mut parents: Vec<&GmodNode> = Vec::new();
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        self.traverse_node(
            self.root(),
            &mut parents,
            &mut occurrences,
            state,
            &options,
            &mut handler,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn traverse_node<'a, S>(
        &'a self,
        node: &'a GmodNode,
        parents: &mut Vec<&'a GmodNode>,
        occurrences: &mut HashMap<&'a str, usize>,
        state: &mut S,
        options: &TraversalOptions,
        handler: &mut impl FnMut(&[&GmodNode], &GmodNode, &mut S) -> TraversalControl,
    ) -> bool {
        let count = occurrences.entry(node.code()).or_insert(0);
        *count += 1;
        if *count > options.max_traversal_occurrences {
            return true;
        }

        match handler(parents, node, state) {
            TraversalControl::Stop => return false,
            TraversalControl::SkipSubtree => return true,
            TraversalControl::Continue => {}
        }

        parents.push(node);
        for code in node.children() {
            if let Some(child) = self.nodes.get(code.as_str()) {
                if !self.traverse_node(child, parents, occurrences, state, options, handler) {
                    parents.pop();
                    return false;
                }
            } else {
                warn!(code = %code, "child code missing from catalog during traversal");
            }
        }
        parents.pop();
        true
    }

    /// Bounded depth-first search for a path from `from` (or the root, if
    /// `from` is `None`) down to `to`. Returns the intermediate nodes
    /// (exclusive of `from`, inclusive of `to`) on success.
    pub fn path_exists_between(&self, from: Option<&GmodNode>, to: &GmodNode) -> (bool, Vec<GmodNode>) {
        let start = from.unwrap_or_else(|| self.root());
        if start.code() == to.code() {
            return (true, Vec::new());
        }
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        if self.dfs_find(start, to.code(), &mut visited, &mut path) {
            (true, path)
        } else {
            (false, Vec::new())
        }
    }

    fn dfs_find(
        &self,
        current: &GmodNode,
        target_code: &str,
        visited: &mut HashSet<String>,
        path: &mut Vec<GmodNode>,
    ) -> bool {
        if !visited.insert(current.code().to_string()) {
            return false;
        }
        for code in current.children() {
            if let Some(child) = self.nodes.get(code) {
                path.push(child.clone());
                if code == target_code || self.dfs_find(child, target_code, visited, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }
}
