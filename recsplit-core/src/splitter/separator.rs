//! Literal separator splitting with separator retention

use crate::config::KeepType;

/// Split `text` on the literal `separator`, re-attaching it per `keep_type`.
///
/// An empty separator splits into characters. Empty parts are dropped.
pub(crate) fn split_on_separator<'a>(
    text: &'a str,
    separator: &str,
    keep_type: KeepType,
) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let parts: Vec<&str> = match keep_type {
        KeepType::None => text.split(separator).collect(),
        KeepType::Start => {
            let mut parts = Vec::new();
            let mut start = 0;
            for (idx, _) in text.match_indices(separator) {
                parts.push(&text[start..idx]);
                start = idx;
            }
            parts.push(&text[start..]);
            parts
        }
        KeepType::End => {
            let mut parts = Vec::new();
            let mut start = 0;
            for (idx, matched) in text.match_indices(separator) {
                let end = idx + matched.len();
                parts.push(&text[start..end]);
                start = end;
            }
            parts.push(&text[start..]);
            parts
        }
    };

    parts.into_iter().filter(|part| !part.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "1a23a45a67890c1a234b5678a90";

    #[test]
    fn test_discard_separator() {
        assert_eq!(
            split_on_separator(TEXT, "a", KeepType::None),
            ["1", "23", "45", "67890c1", "234b5678", "90"]
        );
    }

    #[test]
    fn test_keep_at_start() {
        assert_eq!(
            split_on_separator(TEXT, "a", KeepType::Start),
            ["1", "a23", "a45", "a67890c1", "a234b5678", "a90"]
        );
    }

    #[test]
    fn test_keep_at_end() {
        assert_eq!(
            split_on_separator(TEXT, "a", KeepType::End),
            ["1a", "23a", "45a", "67890c1a", "234b5678a", "90"]
        );
    }

    #[test]
    fn test_consecutive_separators_drop_empty_parts() {
        assert_eq!(split_on_separator("x,,y,", ",", KeepType::None), ["x", "y"]);
        assert_eq!(
            split_on_separator(",x,,y", ",", KeepType::Start),
            [",x", ",", ",y"]
        );
        assert_eq!(
            split_on_separator("x,,y,", ",", KeepType::End),
            ["x,", ",", "y,"]
        );
    }

    #[test]
    fn test_missing_separator_yields_whole_text() {
        assert_eq!(split_on_separator("abc", "z", KeepType::Start), ["abc"]);
    }

    #[test]
    fn test_empty_separator_splits_characters() {
        assert_eq!(
            split_on_separator("añ日", "", KeepType::End),
            ["a", "ñ", "日"]
        );
    }

    #[test]
    fn test_multichar_separator() {
        assert_eq!(
            split_on_separator("p1\n\np2\n\n\np3", "\n\n", KeepType::End),
            ["p1\n\n", "p2\n\n", "\np3"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(split_on_separator("", "a", KeepType::None).is_empty());
        assert!(split_on_separator("", "", KeepType::None).is_empty());
    }
}
