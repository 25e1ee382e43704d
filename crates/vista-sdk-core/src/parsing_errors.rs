use std::fmt;

/// A single diagnostic produced while parsing a `Location`, `GmodPath`, or
/// `LocalId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    /// Coarse error category, e.g. `"InvalidCode"`, `"InvalidOrder"`.
    pub category: String,
    /// Human-readable diagnostic message.
    pub message: String,
}

impl ParsingError {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// An ordered, append-only accumulator of parse diagnostics.
///
/// Parsers never throw on a recoverable error: they record it here and keep
/// going, so a caller sees every violation in one pass rather than just the
/// first. Empty means the parse succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingErrors {
    errors: Vec<ParsingError>,
}

impl ParsingErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, category: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ParsingError::new(category, message));
    }

    /// Merge another accumulator's diagnostics into this one, in order.
    pub fn extend(&mut self, other: ParsingErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsingError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&ParsingError> {
        self.errors.first()
    }
}

impl fmt::Display for ParsingErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ParsingErrors {
    type Item = ParsingError;
    type IntoIter = std::vec::IntoIter<ParsingError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let errors = ParsingErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn push_accumulates_in_order() {
        let mut errors = ParsingErrors::new();
        errors.push("InvalidCode", "unknown letter 'X'");
        errors.push("InvalidOrder", "letters out of order");
        assert_eq!(errors.len(), 2);
        let msgs: Vec<_> = errors.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(msgs, ["InvalidCode", "InvalidOrder"]);
    }

    #[test]
    fn extend_preserves_order() {
        let mut a = ParsingErrors::new();
        a.push("A", "first");
        let mut b = ParsingErrors::new();
        b.push("B", "second");
        a.extend(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.first().unwrap().category, "A");
    }

    #[test]
    fn display_joins_with_newlines() {
        let mut errors = ParsingErrors::new();
        errors.push("InvalidCode", "bad");
        errors.push("InvalidOrder", "also bad");
        let text = errors.to_string();
        assert_eq!(text, "InvalidCode: bad\nInvalidOrder: also bad");
    }
}
