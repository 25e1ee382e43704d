//! Literal tokens fixed by the `dnv-v2` LocalId naming rule, restored as
//! named constants (`ISO19848Constants.h` in the original SDK) rather than
//! scattered inline literals.

/// The LocalId naming rule this SDK implements.
pub const NAMING_RULE: &str = "dnv-v2";

/// Token prefix for a VIS version segment in a LocalId string.
pub const VIS_VERSION_PREFIX: &str = "vis-";

/// Token introducing the secondary GMOD path segment.
pub const SECONDARY_ITEM_TOKEN: &str = "sec";

/// Token introducing the metadata tag segment.
pub const META_TOKEN: &str = "meta";

/// Code of the GMOD root node, always present in a well-formed catalog.
pub const GMOD_ROOT_CODE: &str = "VE";

/// Separator preceding a non-custom metadata tag value.
pub const TAG_SEPARATOR_STANDARD: char = '-';

/// Separator preceding a custom metadata tag value.
pub const TAG_SEPARATOR_CUSTOM: char = '~';

/// Sentinel group name permitting repeated occurrence in position validation.
pub const DEFAULT_GROUP: &str = "DEFAULT_GROUP";

/// Synthetic placeholder standing in for a numeric component of a codebook
/// value, stripped from the standard-value set at construction time.
pub const NUMBER_PLACEHOLDER: &str = "<number>";
