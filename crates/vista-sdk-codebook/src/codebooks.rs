use std::collections::BTreeMap;

use vista_sdk_core::{CodebookKind, VistaError};
use vista_sdk_dto::CodebooksDto;

use crate::codebook::Codebook;

fn kind_from_dto_name(name: &str) -> Option<CodebookKind> {
    match name {
        "Quantity" => Some(CodebookKind::Quantity),
        "Content" => Some(CodebookKind::Content),
        "Calculation" => Some(CodebookKind::Calculation),
        "State" => Some(CodebookKind::State),
        "Command" => Some(CodebookKind::Command),
        "Type" => Some(CodebookKind::Type),
        "Position" => Some(CodebookKind::Position),
        "Detail" => Some(CodebookKind::Detail),
        "FunctionalServices" => Some(CodebookKind::FunctionalServices),
        "MaintenanceCategory" => Some(CodebookKind::MaintenanceCategory),
        "ActivityType" => Some(CodebookKind::ActivityType),
        _ => None,
    }
}

/// The full set of codebooks for one VIS version, keyed by kind.
#[derive(Debug, Clone)]
pub struct Codebooks {
    by_kind: BTreeMap<CodebookKind, Codebook>,
}

impl Codebooks {
    /// Builds every codebook named in `dto`. Fails if an item's `name`
    /// doesn't match any known [`CodebookKind`].
    pub fn new(dto: CodebooksDto) -> Result<Self, VistaError> {
        let mut by_kind = BTreeMap::new();
        for item in dto.items {
            let kind = kind_from_dto_name(&item.name).ok_or_else(|| {
                VistaError::InvalidInput(format!("unknown codebook name '{}'", item.name))
            })?;
            by_kind.insert(kind, Codebook::new(kind, item));
        }
        Ok(Self { by_kind })
    }

    pub fn get(&self, kind: CodebookKind) -> Option<&Codebook> {
        self.by_kind.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CodebookKind, &Codebook)> {
        self.by_kind.iter()
    }
}
