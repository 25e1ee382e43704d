use vista_sdk_core::CodebookKind;

/// One `{prefix}{sep}{value}` tag token, split but not yet validated against
/// a codebook.
pub(crate) struct TagToken<'a> {
    pub kind: CodebookKind,
    pub is_custom: bool,
    pub value: &'a str,
}

/// Splits a tag token at its first `-` or `~`, whichever comes first, and
/// resolves the prefix to a [`CodebookKind`].
///
/// Returns `None` if the token has no separator or its prefix is unknown.
pub(crate) fn split_tag_token(token: &str) -> Option<TagToken<'_>> {
    let sep_pos = token.find(['-', '~'])?;
    let (prefix, rest) = token.split_at(sep_pos);
    let sep = rest.chars().next()?;
    let value = &rest[1..];
    let kind = CodebookKind::from_prefix(prefix)?;
    Some(TagToken {
        kind,
        is_custom: sep == '~',
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_standard_tag() {
        let tag = split_tag_token("qty-temperature").unwrap();
        assert_eq!(tag.kind, CodebookKind::Quantity);
        assert!(!tag.is_custom);
        assert_eq!(tag.value, "temperature");
    }

    #[test]
    fn splits_custom_tag() {
        let tag = split_tag_token("pos~my-custom-position").unwrap();
        assert_eq!(tag.kind, CodebookKind::Position);
        assert!(tag.is_custom);
        assert_eq!(tag.value, "my-custom-position");
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(split_tag_token("bogus-value").is_none());
    }

    #[test]
    fn rejects_token_without_separator() {
        assert!(split_tag_token("qty").is_none());
    }
}
