use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::debug;
use vista_sdk_codebook::Codebooks;
use vista_sdk_core::{
    strings, CodebookKind, MetadataTag, ParsingErrors, VisVersion, META_TOKEN, NAMING_RULE,
    SECONDARY_ITEM_TOKEN,
};
use vista_sdk_gmod::{Gmod, GmodPath};
use vista_sdk_location::Locations;

use crate::error::LocalIdError;
use crate::local_id::LocalId;
use crate::tag_token::split_tag_token;

/// Builds a [`LocalId`] through a chain of immutable `with_*` calls, or by
/// [`LocalIdBuilder::parse`]ing one from its canonical string form.
#[derive(Debug, Clone, Default)]
pub struct LocalIdBuilder {
    version: Option<VisVersion>,
    verbose: bool,
    primary_item: Option<GmodPath>,
    secondary_item: Option<GmodPath>,
    tags: BTreeMap<CodebookKind, MetadataTag>,
}

impl LocalIdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: VisVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_verbose_mode(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_primary_item(mut self, path: GmodPath) -> Self {
        self.primary_item = Some(path);
        self
    }

    pub fn with_secondary_item(mut self, path: GmodPath) -> Self {
        self.secondary_item = Some(path);
        self
    }

    pub fn with_tag(mut self, tag: MetadataTag) -> Self {
        self.tags.insert(tag.kind(), tag);
        self
    }

    pub fn without_tag(mut self, kind: CodebookKind) -> Self {
        self.tags.remove(&kind);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.version.is_some() && self.primary_item.is_some() && !self.tags.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.primary_item.is_none() && self.secondary_item.is_none() && self.tags.is_empty()
    }

    /// Finalizes the builder, failing if the version, primary item, or every
    /// tag slot is missing.
    pub fn build(self) -> Result<LocalId, LocalIdError> {
        let version = self.version.ok_or(LocalIdError::MissingVersion)?;
        let primary_item = self.primary_item.ok_or(LocalIdError::MissingPrimaryItem)?;
        if self.tags.is_empty() {
            return Err(LocalIdError::MissingTag);
        }
        Ok(LocalId::new(
            version,
            self.verbose,
            primary_item,
            self.secondary_item,
            self.tags,
        ))
    }

    /// Parses the canonical (or verbose) LocalId string form:
    ///
    /// ```text
    /// /dnv-v2/vis-{version}/{primary-path}[~{common-name}][/sec/{secondary-path}[~{common-name}]]/meta/{tag}[/{tag}...]
    /// ```
    ///
    /// The `~{common-name}` suffix (verbose mode) attaches directly to the
    /// last path token of the primary or secondary item, with no `/` before
    /// it — not as a standalone segment.
    ///
    /// Collects every recoverable diagnostic and keeps going where possible,
    /// so a caller sees every violation from one pass rather than just the
    /// first.
    pub fn parse(
        s: &str,
        gmod: &Gmod,
        locations: &Locations,
        codebooks: &Codebooks,
    ) -> (Option<LocalId>, ParsingErrors) {
        let mut errors = ParsingErrors::new();
        debug!(input = %s, "parsing LocalId");

        let mut tokens = s.split('/').peekable();
        if tokens.peek() == Some(&"") {
            tokens.next();
        }

        let Some(naming_rule) = tokens.next() else {
            errors.push("InvalidLocalId", "empty input");
            return (None, errors);
        };
        if naming_rule != NAMING_RULE {
            errors.push(
                "InvalidNamingRule",
                format!("expected naming rule '{NAMING_RULE}', got '{naming_rule}'"),
            );
            return (None, errors);
        }

        let Some(version_token) = tokens.next() else {
            errors.push("MissingVersion", "no VIS version token");
            return (None, errors);
        };
        let Ok(version) = VisVersion::from_str(version_token) else {
            errors.push(
                "InvalidVersion",
                format!("'{version_token}' is not a known VIS version"),
            );
            return (None, errors);
        };

        let mut verbose = false;

        let mut primary_tokens: Vec<String> = Vec::new();
        let mut hit_sec = false;
        let mut hit_meta = false;
        for t in tokens.by_ref() {
            if t == SECONDARY_ITEM_TOKEN {
                hit_sec = true;
                break;
            }
            if t == META_TOKEN {
                hit_meta = true;
                break;
            }
            primary_tokens.push(t.to_string());
        }
        if primary_tokens.is_empty() {
            errors.push("MissingPrimaryItem", "no primary item path");
            return (None, errors);
        }
        if let Some(last) = primary_tokens.last_mut() {
            if let Some(idx) = last.find('~') {
                verbose = true;
                last.truncate(idx);
            }
        }
        let (primary_item, primary_errors) =
            GmodPath::parse(&primary_tokens.join("/"), gmod, locations);
        errors.extend(primary_errors);
        let Some(primary_item) = primary_item else {
            return (None, errors);
        };

        let mut secondary_item = None;
        if hit_sec {
            let mut secondary_tokens: Vec<String> = Vec::new();
            for t in tokens.by_ref() {
                if t == META_TOKEN {
                    hit_meta = true;
                    break;
                }
                secondary_tokens.push(t.to_string());
            }
            if secondary_tokens.is_empty() {
                errors.push("MissingSecondaryItem", "'sec' token with no path following it");
            } else {
                if let Some(last) = secondary_tokens.last_mut() {
                    if let Some(idx) = last.find('~') {
                        verbose = true;
                        last.truncate(idx);
                    }
                }
                let (parsed, sec_errors) =
                    GmodPath::parse(&secondary_tokens.join("/"), gmod, locations);
                errors.extend(sec_errors);
                secondary_item = parsed;
            }
        }

        if !hit_meta {
            errors.push("MissingMetaToken", "no 'meta' token found");
            return (None, errors);
        }

        let mut tags: BTreeMap<CodebookKind, MetadataTag> = BTreeMap::new();
        let mut last_order: Option<usize> = None;
        for t in tokens {
            let Some(token) = split_tag_token(t) else {
                errors.push("InvalidTag", format!("'{t}' is not a recognizable tag token"));
                continue;
            };
            if !strings::is_uri_unreserved_str(token.value) {
                errors.push(
                    "InvalidTagValue",
                    format!("tag value '{}' contains a disallowed character", token.value),
                );
                continue;
            }
            let order = codebook_order_index(token.kind);
            if let Some(last) = last_order {
                if order < last {
                    errors.push(
                        "OutOfOrderTag",
                        format!("tag '{}' appears out of codebook order", token.kind.prefix()),
                    );
                    continue;
                }
            }
            last_order = Some(order);
            if let Some(codebook) = codebooks.get(token.kind) {
                match codebook.create_tag(token.value) {
                    Some(tag) => {
                        tags.insert(token.kind, tag);
                        continue;
                    }
                    None => {
                        errors.push(
                            "InvalidTagValue",
                            format!("'{}' is not accepted by the {} codebook", token.value, token.kind),
                        );
                        continue;
                    }
                }
            }
            tags.insert(token.kind, MetadataTag::new(token.kind, token.value, token.is_custom));
        }

        if tags.is_empty() {
            errors.push("MissingTag", "no metadata tags found after 'meta'");
            return (None, errors);
        }

        if !errors.is_empty() {
            return (None, errors);
        }

        let local_id = LocalId::new(version, verbose, primary_item, secondary_item, tags);
        (Some(local_id), errors)
    }
}

fn codebook_order_index(kind: CodebookKind) -> usize {
    vista_sdk_core::METADATA_TAG_ORDER
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(usize::MAX)
}
