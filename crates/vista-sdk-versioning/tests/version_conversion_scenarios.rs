//! Exercises the version-conversion scenario verbatim: a LocalId parsed at
//! VIS 3-4a, carried three changelog steps forward to 3-7a, picking up a
//! terminal code rename along the way.

use std::collections::BTreeMap;

use vista_sdk_codebook::Codebooks;
use vista_sdk_core::{CodebookKind, VisVersion};
use vista_sdk_dto::{
    CodebooksDto, GmodDto, GmodNodeDto, GmodVersioningAssignmentChangeDto, GmodVersioningDto,
    GmodVersioningNodeChangeDto, LocationsDto,
};
use vista_sdk_gmod::Gmod;
use vista_sdk_localid::LocalIdBuilder;
use vista_sdk_location::Locations;
use vista_sdk_versioning::GmodVersioning;

fn node_dto(code: &str, category: &str, node_type: &str) -> GmodNodeDto {
    GmodNodeDto {
        category: category.to_string(),
        node_type: node_type.to_string(),
        code: code.to_string(),
        name: code.to_string(),
        common_name: None,
        definition: None,
        common_definition: None,
        install_substructure: None,
        normal_assignment_names: BTreeMap::new(),
    }
}

/// `VE/400a/410/411/411i/411.1/C101/{terminal_code}`, `C101` a hard
/// individualizable-span break so the primary item short form reads
/// `411.1/{terminal_code}`.
fn gmod(version: VisVersion, release: &str, terminal_code: &str) -> Gmod {
    Gmod::new(
        version,
        GmodDto {
            vis_release: release.to_string(),
            items: vec![
                node_dto("VE", "ASSET", ""),
                node_dto("400a", "ASSET FUNCTION", "COMPOSITION"),
                node_dto("410", "ASSET FUNCTION", "COMPOSITION"),
                node_dto("411", "ASSET FUNCTION", "COMPOSITION"),
                node_dto("411i", "ASSET FUNCTION", "LEAF"),
                node_dto("411.1", "ASSET FUNCTION", "LEAF"),
                node_dto("C101", "ASSET FUNCTION", "GROUP"),
                node_dto(terminal_code, "ASSET FUNCTION", "LEAF"),
            ],
            relations: vec![
                ["VE".to_string(), "400a".to_string()],
                ["400a".to_string(), "410".to_string()],
                ["410".to_string(), "411".to_string()],
                ["411".to_string(), "411i".to_string()],
                ["411i".to_string(), "411.1".to_string()],
                ["411.1".to_string(), "C101".to_string()],
                ["C101".to_string(), terminal_code.to_string()],
            ],
        },
    )
    .unwrap()
}

fn empty_locations() -> Locations {
    Locations::new(LocationsDto {
        vis_release: "3-4a".to_string(),
        items: vec![],
    })
}

fn empty_codebooks() -> Codebooks {
    Codebooks::new(CodebooksDto {
        vis_release: "3-4a".to_string(),
        items: vec![],
    })
    .unwrap()
}

/// The only changelog entry across all three steps: `C101.31` renames to
/// `C101.32` on the way into 3-5a. 3-6a and 3-7a carry it forward unchanged.
fn versioning() -> GmodVersioning {
    let mut entries = BTreeMap::new();
    entries.insert(
        "C101.31".to_string(),
        GmodVersioningNodeChangeDto {
            operations: vec!["ChangeCode".to_string()],
            source: Some("C101.31".to_string()),
            target: Some("C101.32".to_string()),
            old_assignment: None,
            new_assignment: None,
            delete_assignment: None,
        },
    );
    let mut items = BTreeMap::new();
    items.insert(
        "vis-3-5a".to_string(),
        GmodVersioningAssignmentChangeDto { entries },
    );
    items.insert(
        "vis-3-6a".to_string(),
        GmodVersioningAssignmentChangeDto {
            entries: BTreeMap::new(),
        },
    );
    items.insert(
        "vis-3-7a".to_string(),
        GmodVersioningAssignmentChangeDto {
            entries: BTreeMap::new(),
        },
    );
    GmodVersioning::new(GmodVersioningDto { items }).unwrap()
}

#[test]
fn s6_local_id_carries_a_rename_across_three_version_steps() {
    let gmod_3_4a = gmod(VisVersion::V3_4a, "3-4a", "C101.31");
    let gmod_3_5a = gmod(VisVersion::V3_5a, "3-5a", "C101.32");
    let gmod_3_6a = gmod(VisVersion::V3_6a, "3-6a", "C101.32");
    let gmod_3_7a = gmod(VisVersion::V3_7a, "3-7a", "C101.32");
    let locations = empty_locations();
    let codebooks = empty_codebooks();
    let versioning = versioning();

    let input = "/dnv-v2/vis-3-4a/411.1/C101.31-2/meta/qty-temperature";
    let (local_id, errors) = LocalIdBuilder::parse(input, &gmod_3_4a, &locations, &codebooks);
    assert!(errors.is_empty(), "{errors}");
    let local_id = local_id.unwrap();

    let converted = versioning
        .convert_local_id(VisVersion::V3_4a, &local_id, VisVersion::V3_5a, &gmod_3_5a)
        .unwrap()
        .unwrap();
    let converted = versioning
        .convert_local_id(VisVersion::V3_5a, &converted, VisVersion::V3_6a, &gmod_3_6a)
        .unwrap()
        .unwrap();
    let converted = versioning
        .convert_local_id(VisVersion::V3_6a, &converted, VisVersion::V3_7a, &gmod_3_7a)
        .unwrap()
        .unwrap();

    assert_eq!(converted.version(), VisVersion::V3_7a);
    assert_eq!(converted.primary_item().node().code(), "C101.32");
    assert_eq!(converted.primary_item().to_string(), "411.1/C101.32-2");
    let quantity = converted.tag(CodebookKind::Quantity).unwrap();
    assert_eq!(quantity.value(), "temperature");
    assert!(!quantity.is_custom());
    assert_eq!(
        converted.to_string(),
        "/dnv-v2/vis-3-7a/411.1/C101.32-2/meta/qty-temperature"
    );
}
