use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::warn;
use vista_sdk_core::VisVersion;
use vista_sdk_dto::GmodVersioningDto;
use vista_sdk_gmod::{Gmod, GmodNode, GmodPath};
use vista_sdk_localid::{LocalId, LocalIdBuilder};

use crate::changelog::{ChangelogEntry, VersioningChangelog};
use crate::error::VersioningError;

/// How a qualifying node's changelog entry bears on path reconstruction.
///
/// A "selection change" operation isn't in this set — it falls through to
/// `Unchanged`, same as a node with no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QualifyingKind {
    AssignmentDelete,
    AssignmentChange { new_assignment: String },
    Unchanged,
}

impl QualifyingKind {
    fn classify(entry: Option<&ChangelogEntry>) -> Self {
        let Some(entry) = entry else {
            return Self::Unchanged;
        };
        if entry.delete_assignment == Some(true) {
            return Self::AssignmentDelete;
        }
        if let Some(new_assignment) = &entry.new_assignment {
            if entry.operations.iter().any(|op| op == "AssignmentChange") {
                return Self::AssignmentChange {
                    new_assignment: new_assignment.clone(),
                };
            }
        }
        Self::Unchanged
    }
}

/// The full cross-version GMOD changelog: one [`VersioningChangelog`] per
/// target version, keyed by that target.
///
/// Conversion always steps forward one version at a time — there is no
/// changelog that skips a release — so converting across several versions
/// means chaining [`GmodVersioning::convert_node`] through every
/// intermediate [`VisVersion`].
#[derive(Debug, Clone)]
pub struct GmodVersioning {
    changelogs: BTreeMap<VisVersion, VersioningChangelog>,
}

impl GmodVersioning {
    pub fn new(dto: GmodVersioningDto) -> Result<Self, VersioningError> {
        let mut changelogs = BTreeMap::new();
        for (version_str, change_dto) in dto.items {
            let target_version = VisVersion::from_str(&version_str)
                .map_err(|_| VersioningError::UnknownVersion(version_str))?;
            changelogs.insert(target_version, VersioningChangelog::new(target_version, change_dto));
        }
        Ok(Self { changelogs })
    }

    pub fn changelog(&self, target_version: VisVersion) -> Option<&VersioningChangelog> {
        self.changelogs.get(&target_version)
    }

    /// Converts a single node one version step forward.
    ///
    /// A node with no changelog entry carries its code forward unchanged;
    /// one naming a `target_code` that the target catalog doesn't actually
    /// have returns `Ok(None)` rather than failing outright — an original
    /// data inconsistency that's worth surfacing distinctly from "no entry
    /// at all", via the [`warn!`] below, rather than treated as fatal.
    pub fn convert_node(
        &self,
        source_version: VisVersion,
        node: &GmodNode,
        target_version: VisVersion,
        target_gmod: &Gmod,
    ) -> Result<Option<GmodNode>, VersioningError> {
        if source_version >= target_version {
            return Err(VersioningError::DescendingConversion {
                from: source_version,
                to: target_version,
            });
        }
        let changelog = self
            .changelogs
            .get(&target_version)
            .ok_or(VersioningError::MissingChangelog(target_version))?;

        let entry = changelog.entry(node.code());
        let target_code = entry
            .and_then(|e| e.target_code.as_deref())
            .unwrap_or_else(|| node.code());

        let Some(target_node) = target_gmod.node(target_code) else {
            if entry.and_then(|e| e.target_code.as_ref()).is_some() {
                warn!(
                    source_code = node.code(),
                    target_code, %target_version,
                    "changelog names a target code absent from the target catalog"
                );
            }
            return Ok(None);
        };

        let mut converted = target_node.clone();
        if let Some(location) = node.location() {
            if matches!(converted.node_type(), "GROUP" | "SELECTION") {
                return Err(VersioningError::LocationRejected {
                    code: converted.code().to_string(),
                    location: location.as_str().to_string(),
                });
            }
            converted = converted.with_location(location.clone());
        }
        Ok(Some(converted))
    }

    /// As [`GmodVersioning::convert_node`] but steps through every
    /// intermediate version between `source_version` and `target_version`,
    /// using `gmods` to look up each intermediate catalog.
    pub fn convert_node_chain(
        &self,
        source_version: VisVersion,
        node: &GmodNode,
        target_version: VisVersion,
        gmods: &BTreeMap<VisVersion, Gmod>,
    ) -> Result<Option<GmodNode>, VersioningError> {
        if source_version >= target_version {
            return Err(VersioningError::DescendingConversion {
                from: source_version,
                to: target_version,
            });
        }
        let mut current_version = source_version;
        let mut current_node = node.clone();
        while current_version != target_version {
            let Some(next_version) = current_version.next() else {
                return Err(VersioningError::MissingChangelog(target_version));
            };
            let Some(next_gmod) = gmods.get(&next_version) else {
                return Err(VersioningError::MissingChangelog(next_version));
            };
            match self.convert_node(current_version, &current_node, next_version, next_gmod)? {
                Some(converted) => current_node = converted,
                None => return Ok(None),
            }
            current_version = next_version;
        }
        Ok(Some(current_node))
    }

    /// Converts a full [`GmodPath`] one version step forward.
    ///
    /// Converts every node in `full_path()` — the *qualifying nodes* — and
    /// classifies each by its changelog entry. If the converted terminal
    /// maps onto the target catalog's root, the whole path collapses to
    /// [`GmodPath::root`]. A qualifying node whose entry deletes its
    /// assignment is fatal if it's the terminal, otherwise dropped during
    /// reconstruction. Otherwise, an attempt is made to assemble the
    /// converted nodes directly; when they don't form a contiguous chain
    /// any more (a merge, reparenting, or assignment change altered the
    /// shape), [`GmodVersioning::reconstruct_path`] splices in whatever
    /// intermediates — or assignment-change replacements — the target
    /// catalog now requires.
    pub fn convert_path(
        &self,
        source_version: VisVersion,
        path: &GmodPath,
        target_version: VisVersion,
        target_gmod: &Gmod,
    ) -> Result<Option<GmodPath>, VersioningError> {
        let changelog = self
            .changelogs
            .get(&target_version)
            .ok_or(VersioningError::MissingChangelog(target_version))?;

        let mut qualifying: Vec<(GmodNode, QualifyingKind)> =
            Vec::with_capacity(path.parents().len() + 1);
        for (_, node) in path.full_path() {
            let Some(converted) =
                self.convert_node(source_version, node, target_version, target_gmod)?
            else {
                return Ok(None);
            };
            let kind = QualifyingKind::classify(changelog.entry(node.code()));
            qualifying.push((converted, kind));
        }

        let (terminal, terminal_kind) = qualifying
            .last()
            .cloned()
            .expect("full_path always yields at least the terminal node");
        if terminal_kind == QualifyingKind::AssignmentDelete {
            return Err(VersioningError::DeletedTerminalAssignment {
                code: terminal.code().to_string(),
            });
        }
        if terminal.code() == target_gmod.root().code() {
            return Ok(Some(GmodPath::root(terminal)));
        }

        let mut collapsed: Vec<(GmodNode, QualifyingKind)> = Vec::with_capacity(qualifying.len());
        for (node, kind) in qualifying {
            if let Some((prev_node, _)) = collapsed.last_mut() {
                if prev_node.code() == node.code() {
                    match (prev_node.location(), node.location()) {
                        (Some(a), Some(b)) if a != b => {
                            return Err(VersioningError::ConflictingLocations {
                                code: node.code().to_string(),
                            });
                        }
                        (None, Some(_)) => *prev_node = node,
                        _ => {}
                    }
                    continue;
                }
            }
            collapsed.push((node, kind));
        }

        let (last, _) = collapsed.pop().expect("terminal node always present");
        let parents: Vec<GmodNode> = collapsed.iter().map(|(node, _)| node.clone()).collect();
        if GmodPath::is_valid(&parents, &last) {
            let path =
                GmodPath::new(parents, last).map_err(|_| VersioningError::ReconstructionFailed)?;
            return Ok(Some(path));
        }

        self.reconstruct_path(target_gmod, collapsed, last).map(Some)
    }

    /// Rebuilds a path from a set of nodes the target catalog's edges no
    /// longer connect directly, by walking back from the terminal node and
    /// splicing in whatever intermediates [`Gmod::path_exists_between`]
    /// finds between each qualifying node and the next.
    ///
    /// An intermediate classified [`QualifyingKind::AssignmentDelete`] is
    /// dropped outright rather than spliced. One classified
    /// [`QualifyingKind::AssignmentChange`] is replaced: the source-side
    /// assignment node is skipped and the entry's `new_assignment` node is
    /// spliced in its place. Any other qualifying parent is dropped (rather
    /// than spliced) only while another asset-function node remains
    /// further up the chain to anchor the walk; dropping the last one is an
    /// error.
    fn reconstruct_path(
        &self,
        target_gmod: &Gmod,
        mut parents: Vec<(GmodNode, QualifyingKind)>,
        terminal: GmodNode,
    ) -> Result<GmodPath, VersioningError> {
        let mut built: Vec<GmodNode> = vec![target_gmod.root().clone()];

        while let Some((next, kind)) = parents.first().cloned() {
            parents.remove(0);
            match kind {
                QualifyingKind::AssignmentDelete => continue,
                QualifyingKind::AssignmentChange { new_assignment } => {
                    let Some(replacement) = target_gmod.node(&new_assignment) else {
                        continue;
                    };
                    let anchor = built.last().expect("root always present");
                    let (found, intermediates) =
                        target_gmod.path_exists_between(Some(anchor), replacement);
                    if found {
                        built.extend(intermediates);
                    }
                }
                QualifyingKind::Unchanged => {
                    let anchor = built.last().expect("root always present");
                    let (found, intermediates) = target_gmod.path_exists_between(Some(anchor), &next);
                    if found {
                        built.extend(intermediates);
                        continue;
                    }
                    if !parents.iter().any(|(n, _)| n.is_asset_function_node()) {
                        return Err(VersioningError::RemovedLastAssetFunctionNode);
                    }
                }
            }
        }

        let anchor = built.last().expect("root always present");
        let (found, intermediates) = target_gmod.path_exists_between(Some(anchor), &terminal);
        if !found {
            return Err(VersioningError::ReconstructionFailed);
        }
        built.extend(intermediates);

        vista_sdk_gmod::LocationSetsVisitor::propagate(&mut built);

        let node = built.pop().expect("terminal always present after extend");
        GmodPath::new(built, node).map_err(|_| VersioningError::ReconstructionFailed)
    }

    /// Converts a [`LocalId`] one version step forward: its primary path,
    /// its optional secondary path, and carries every metadata tag and the
    /// verbose flag across unchanged.
    pub fn convert_local_id(
        &self,
        source_version: VisVersion,
        local_id: &LocalId,
        target_version: VisVersion,
        target_gmod: &Gmod,
    ) -> Result<Option<LocalId>, VersioningError> {
        let Some(primary) = self.convert_path(
            source_version,
            local_id.primary_item(),
            target_version,
            target_gmod,
        )?
        else {
            return Ok(None);
        };

        let secondary = match local_id.secondary_item() {
            Some(path) => {
                match self.convert_path(source_version, path, target_version, target_gmod)? {
                    Some(converted) => Some(converted),
                    None => return Ok(None),
                }
            }
            None => None,
        };

        let mut builder = LocalIdBuilder::new()
            .with_version(target_version)
            .with_verbose_mode(local_id.is_verbose())
            .with_primary_item(primary);
        if let Some(secondary) = secondary {
            builder = builder.with_secondary_item(secondary);
        }
        for tag in local_id.tags() {
            builder = builder.with_tag(tag.clone());
        }
        Ok(Some(builder.build()?))
    }
}
