use std::collections::BTreeMap;
use std::fmt;

use vista_sdk_core::{CodebookKind, MetadataTag, VisVersion, META_TOKEN, NAMING_RULE, SECONDARY_ITEM_TOKEN};
use vista_sdk_gmod::GmodPath;

/// An immutable, fully-built LocalId.
///
/// Construct one through [`crate::LocalIdBuilder`]; this type only knows how
/// to hold a valid snapshot and render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalId {
    version: VisVersion,
    verbose: bool,
    primary_item: GmodPath,
    secondary_item: Option<GmodPath>,
    tags: BTreeMap<CodebookKind, MetadataTag>,
}

impl LocalId {
    pub(crate) fn new(
        version: VisVersion,
        verbose: bool,
        primary_item: GmodPath,
        secondary_item: Option<GmodPath>,
        tags: BTreeMap<CodebookKind, MetadataTag>,
    ) -> Self {
        Self {
            version,
            verbose,
            primary_item,
            secondary_item,
            tags,
        }
    }

    pub fn version(&self) -> VisVersion {
        self.version
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn primary_item(&self) -> &GmodPath {
        &self.primary_item
    }

    pub fn secondary_item(&self) -> Option<&GmodPath> {
        self.secondary_item.as_ref()
    }

    /// Tags in fixed codebook order (Quantity, Content, Calculation, State,
    /// Command, Type, Position, Detail).
    pub fn tags(&self) -> impl Iterator<Item = &MetadataTag> {
        self.tags.values()
    }

    pub fn tag(&self, kind: CodebookKind) -> Option<&MetadataTag> {
        self.tags.get(&kind)
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{NAMING_RULE}/{}", self.version.as_prefixed_str())?;
        write!(f, "/{}", self.primary_item)?;
        if self.verbose {
            let name = self
                .primary_item
                .node()
                .common_name()
                .unwrap_or_else(|| self.primary_item.node().name());
            write!(f, "~{name}")?;
        }
        if let Some(secondary) = &self.secondary_item {
            write!(f, "/{SECONDARY_ITEM_TOKEN}/{secondary}")?;
            if self.verbose {
                let name = secondary
                    .node()
                    .common_name()
                    .unwrap_or_else(|| secondary.node().name());
                write!(f, "~{name}")?;
            }
        }
        write!(f, "/{META_TOKEN}")?;
        for tag in self.tags.values() {
            write!(f, "/{tag}")?;
        }
        Ok(())
    }
}
