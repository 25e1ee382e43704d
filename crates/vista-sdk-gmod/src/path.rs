use std::collections::HashSet;
use std::fmt;

use vista_sdk_core::{ParsingErrors, GMOD_ROOT_CODE};
use vista_sdk_location::{Location, Locations};

use crate::error::GmodError;
use crate::gmod::Gmod;
use crate::node::GmodNode;

/// Groups a resolved path's nodes into contiguous spans that share one
/// spatial scope: setting a [`Location`] on any member applies it to the
/// whole span. A span is bounded by the terminal node (the `target`) and
/// by any node [`GmodNode::is_individualizable`] rejects.
pub struct LocationSetsVisitor;

impl LocationSetsVisitor {
    /// `nodes` is a full path, root-first, terminal node last.
    pub fn sets(nodes: &[GmodNode]) -> Vec<Vec<usize>> {
        let len = nodes.len();
        let mut sets = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        for (idx, node) in nodes.iter().enumerate() {
            let is_target = idx == len - 1;
            let is_in_set = !current.is_empty();
            if node.is_individualizable(is_target, is_in_set) {
                current.push(idx);
            } else if !current.is_empty() {
                sets.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            sets.push(current);
        }
        sets
    }

    /// Copies each set's first explicit location onto every member of that
    /// set.
    pub fn propagate(nodes: &mut [GmodNode]) {
        for set in Self::sets(nodes) {
            let location = set.iter().find_map(|&i| nodes[i].location().cloned());
            if let Some(location) = location {
                for &i in &set {
                    nodes[i] = nodes[i].with_location(location.clone());
                }
            }
        }
    }
}

/// A resolved chain of GMOD nodes from the root down to a terminal node.
///
/// `parents` always starts with the root (`VE`); `node` is the terminal
/// item the path identifies. Nodes are owned clones rather than borrows
/// into a [`Gmod`] — a path outlives the catalog lookup that produced it,
/// and carries its own per-node location overrides the catalog doesn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmodPath {
    parents: Vec<GmodNode>,
    node: GmodNode,
}

impl GmodPath {
    /// Builds a path, rejecting one that doesn't satisfy [`GmodPath::is_valid`].
    pub fn new(parents: Vec<GmodNode>, node: GmodNode) -> Result<Self, GmodError> {
        match parents.first() {
            None => return Err(GmodError::NotRooted(node.code().to_string())),
            Some(first) if first.code() != GMOD_ROOT_CODE => {
                return Err(GmodError::NotRooted(first.code().to_string()))
            }
            _ => {}
        }
        if let Some(bad) = parents.windows(2).find(|w| !w[0].is_child(w[1].code())) {
            return Err(GmodError::NotAChild(bad[1].code().to_string(), bad[0].code().to_string()));
        }
        let last = parents.last().expect("checked non-empty above");
        if !last.is_child(node.code()) {
            return Err(GmodError::NotAChild(node.code().to_string(), last.code().to_string()));
        }
        Ok(Self { parents, node })
    }

    /// The one legal path with no parents at all: the root node addressing
    /// itself. [`GmodPath::new`] rejects this (it requires a rooted,
    /// non-empty parent chain), since every other path is at least one
    /// level below the root.
    pub fn root(node: GmodNode) -> Self {
        Self {
            parents: Vec::new(),
            node,
        }
    }

    pub fn is_valid(parents: &[GmodNode], node: &GmodNode) -> bool {
        let Some(first) = parents.first() else {
            return false;
        };
        if first.code() != GMOD_ROOT_CODE {
            return false;
        }
        if parents.windows(2).any(|w| !w[0].is_child(w[1].code())) {
            return false;
        }
        parents.last().is_some_and(|last| last.is_child(node.code()))
    }

    pub fn parents(&self) -> &[GmodNode] {
        &self.parents
    }

    pub fn node(&self) -> &GmodNode {
        &self.node
    }

    /// `(depth, &node)` pairs from `depth` to the terminal node, inclusive.
    pub fn full_path_from(&self, depth: usize) -> impl Iterator<Item = (usize, &GmodNode)> {
        self.parents
            .iter()
            .chain(std::iter::once(&self.node))
            .enumerate()
            .skip(depth)
    }

    pub fn full_path(&self) -> impl Iterator<Item = (usize, &GmodNode)> {
        self.full_path_from(0)
    }

    fn full_nodes(&self) -> Vec<GmodNode> {
        self.full_path().map(|(_, n)| n.clone()).collect()
    }

    /// The ordered list of individualizable spans across the full path —
    /// see [`LocationSetsVisitor`].
    pub fn individualizable_sets(&self) -> Vec<Vec<usize>> {
        LocationSetsVisitor::sets(&self.full_nodes())
    }

    /// Short-form rendering: one anchor (the deepest member of each
    /// individualizable set, or the node itself when it belongs to none)
    /// per segment, joined by `/`, with a `-{location}` suffix where set.
    pub fn to_short_path_string(&self) -> String {
        let full = self.full_nodes();
        let sets = LocationSetsVisitor::sets(&full);
        let mut anchor_of = vec![None; full.len()];
        for set in &sets {
            if let Some(&anchor) = set.last() {
                for &idx in set {
                    anchor_of[idx] = Some(anchor);
                }
            }
        }
        full.iter()
            .enumerate()
            .filter(|(idx, _)| anchor_of[*idx] == Some(*idx))
            .map(|(_, node)| render_segment(node))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Full-form rendering: every node from the root down, one per segment.
    pub fn to_full_path_string(&self) -> String {
        self.full_path()
            .map(|(_, node)| render_segment(node))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Parses a short-form path string (e.g. `"411.1/C101.31-2"`) against a
    /// catalog and its location table.
    ///
    /// Collects every recoverable diagnostic into the returned
    /// [`ParsingErrors`] instead of stopping at the first one; `None` is
    /// returned whenever the accumulator is non-empty.
    pub fn parse(s: &str, gmod: &Gmod, locations: &Locations) -> (Option<GmodPath>, ParsingErrors) {
        let mut errors = ParsingErrors::new();
        if s.trim().is_empty() {
            errors.push("InvalidPath", "path string is empty");
            return (None, errors);
        }

        let mut tokens: Vec<(GmodNode, Option<Location>)> = Vec::new();
        for raw in s.split('/') {
            if raw.is_empty() {
                errors.push("InvalidPath", "path contains an empty segment");
                continue;
            }
            let (code, location_str) = match raw.split_once('-') {
                Some((c, l)) => (c, Some(l)),
                None => (raw, None),
            };
            let Some(node) = gmod.node(code) else {
                errors.push("InvalidCode", format!("unknown code '{code}'"));
                continue;
            };
            let location = match location_str {
                None => None,
                Some(loc_str) => match locations.parse(loc_str) {
                    Ok(loc) => Some(loc),
                    Err(loc_errors) => {
                        errors.extend(loc_errors);
                        continue;
                    }
                },
            };
            tokens.push((node.clone(), location));
        }

        if !errors.is_empty() {
            return (None, errors);
        }
        if tokens.is_empty() {
            errors.push("InvalidPath", "path has no segments");
            return (None, errors);
        }

        let mut full_nodes: Vec<GmodNode> = vec![gmod.root().clone()];
        for (token_node, _) in &tokens {
            let from_code = full_nodes.last().expect("root always present").code().to_string();
            if from_code == token_node.code() {
                continue;
            }
            match resolve_chain(gmod, &from_code, token_node.code(), 2) {
                chains if chains.is_empty() => {
                    errors.push(
                        "NoValidParentChain",
                        format!("no path from '{from_code}' to '{}'", token_node.code()),
                    );
                    return (None, errors);
                }
                mut chains if chains.len() == 1 => {
                    for code in chains.remove(0) {
                        if let Some(n) = gmod.node(&code) {
                            full_nodes.push(n.clone());
                        }
                    }
                }
                _ => {
                    errors.push(
                        "AmbiguousParentChain",
                        format!("more than one path from '{from_code}' to '{}'", token_node.code()),
                    );
                    return (None, errors);
                }
            }
        }

        for (token_node, location) in &tokens {
            if let Some(location) = location {
                if let Some(slot) = full_nodes.iter_mut().find(|n| n.code() == token_node.code()) {
                    *slot = slot.with_location(location.clone());
                }
            }
        }

        LocationSetsVisitor::propagate(&mut full_nodes);

        let node = full_nodes.pop().expect("at least the root is present");
        let parents = full_nodes;
        match GmodPath::new(parents, node) {
            Ok(path) => (Some(path), errors),
            Err(e) => {
                errors.push("InvalidPath", e.to_string());
                (None, errors)
            }
        }
    }
}

impl fmt::Display for GmodPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_path_string())
    }
}

fn render_segment(node: &GmodNode) -> String {
    match node.location() {
        Some(loc) => format!("{}-{}", node.code(), loc),
        None => node.code().to_string(),
    }
}

/// Enumerates up to `cap` distinct simple paths from `from_code` to
/// `to_code`, each as an ordered code list exclusive of `from_code` and
/// inclusive of `to_code`. Used to detect an ambiguous parent chain during
/// short-form parsing: `cap == 2` is enough to tell "unique" from
/// "ambiguous" without enumerating every path.
fn resolve_chain(gmod: &Gmod, from_code: &str, to_code: &str, cap: usize) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    let mut path = Vec::new();
    let mut visited = HashSet::new();
    chain_dfs(gmod, from_code, to_code, &mut path, &mut visited, &mut results, cap);
    results
}

fn chain_dfs(
    gmod: &Gmod,
    current: &str,
    target: &str,
    path: &mut Vec<String>,
    visited: &mut HashSet<String>,
    results: &mut Vec<Vec<String>>,
    cap: usize,
) {
    if results.len() >= cap {
        return;
    }
    if !visited.insert(current.to_string()) {
        return;
    }
    if let Some(node) = gmod.node(current) {
        for child in node.children() {
            if results.len() >= cap {
                break;
            }
            path.push(child.clone());
            if child == target {
                results.push(path.clone());
            } else {
                chain_dfs(gmod, child, target, path, visited, results, cap);
            }
            path.pop();
        }
    }
    visited.remove(current);
}
