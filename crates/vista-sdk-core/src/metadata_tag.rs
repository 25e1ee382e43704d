use std::fmt;

use crate::codebook_kind::CodebookKind;
use crate::constants::{TAG_SEPARATOR_CUSTOM, TAG_SEPARATOR_STANDARD};

/// A single metadata tag: a codebook kind, its value, and whether the value
/// is a standard (codebook-approved) or custom one.
///
/// Textual form is `{prefix}{sep}{value}`, where `sep` is `-` for standard
/// values and `~` for custom ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetadataTag {
    kind: CodebookKind,
    value: String,
    is_custom: bool,
}

impl MetadataTag {
    /// Construct a tag. Does not validate `value` against any codebook —
    /// that is [`crate::codebook`]'s job in the `vista-sdk-codebook` crate;
    /// this type only knows how to hold and render a tag once validated.
    pub fn new(kind: CodebookKind, value: impl Into<String>, is_custom: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            is_custom,
        }
    }

    pub fn kind(&self) -> CodebookKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    fn separator(&self) -> char {
        if self.is_custom {
            TAG_SEPARATOR_CUSTOM
        } else {
            TAG_SEPARATOR_STANDARD
        }
    }
}

impl fmt::Display for MetadataTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.separator(), self.value)
    }
}
