//! Deserialization shapes for the VIS/GMOD catalog resources: GMOD nodes
//! and their relations, codebooks, relative locations, and the
//! cross-version GMOD changelog.
//!
//! These types carry no behavior. They exist solely so that a caller who
//! already has the catalog JSON in hand (however it got there) can turn it
//! into the strongly-typed structures the rest of the workspace builds on.
//! Fetching, caching, and decompressing the underlying resources is
//! deliberately out of scope here.

mod codebooks_dto;
mod gmod_dto;
mod locations_dto;
mod versioning_dto;

pub use codebooks_dto::{CodebookDto, CodebooksDto};
pub use gmod_dto::{GmodDto, GmodNodeDto};
pub use locations_dto::{LocationsDto, RelativeLocationDto};
pub use versioning_dto::{
    GmodVersioningAssignmentChangeDto, GmodVersioningDto, GmodVersioningNodeChangeDto,
};
