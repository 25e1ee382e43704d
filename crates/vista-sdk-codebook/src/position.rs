use std::fmt;

/// Outcome of validating a value against the `Position` codebook's
/// structural grammar — see [`crate::Codebook::validate_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionValidationResult {
    /// A known standard value, or all-digits.
    Valid,
    /// Not standard, but well-formed enough to accept as a custom value.
    ValidCustom,
    /// Fails the character class, whitespace, or part-validity checks.
    Invalid,
    /// Parts are individually valid but not sorted correctly.
    InvalidOrder,
    /// Parts are individually valid and sorted, but repeat a group.
    InvalidGrouping,
}

impl PositionValidationResult {
    /// True for the two outcomes [`crate::Codebook::create_tag`] accepts.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Valid | Self::ValidCustom)
    }
}

impl fmt::Display for PositionValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Valid => "Valid",
            Self::ValidCustom => "ValidCustom",
            Self::Invalid => "Invalid",
            Self::InvalidOrder => "InvalidOrder",
            Self::InvalidGrouping => "InvalidGrouping",
        };
        f.write_str(s)
    }
}
