//! Pure helpers that turn raw user input into canonical field values.
//!
//! There are two tag profiles. Tags typed by the user (add, edit) go through
//! [`normalize_tags`], which splits, trims, collapses and lowercases. Tags coming
//! from a backup file go through [`import_tags`], which only stringifies and
//! lowercases each element, so a backup re-imports exactly as it was written.

use serde_json::Value;

/// Default character budget for [`title_of`].
pub const DEFAULT_TITLE_WIDTH: usize = 42;

const ELLIPSIS: char = '…';

/// Splits a comma separated tag string into normalized tags.
///
/// Each part is trimmed, internal whitespace runs become a single space and the
/// result is lowercased. Empty parts are dropped; duplicates are kept in order.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(collapse_whitespace)
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_lowercase())
        .collect()
}

/// The stored form of snippet text: outer whitespace removed, nothing else.
pub fn canonical_text(raw: &str) -> String {
    raw.trim().to_string()
}

/// One-line display title: whitespace collapsed, truncated to `max_len` chars.
pub fn title_of(text: &str, max_len: usize) -> String {
    let line = collapse_whitespace(text);
    if line.chars().count() <= max_len {
        return line;
    }
    let mut title: String = line.chars().take(max_len).collect();
    title.push(ELLIPSIS);
    title
}

/// Tag coercion used by the import merger.
pub fn import_tags(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => s.to_lowercase(),
            other => other.to_string().to_lowercase(),
        })
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_are_split_trimmed_and_lowercased() {
        assert_eq!(
            normalize_tags(" Work ,  Home  Office,,"),
            vec!["work", "home office"]
        );
    }

    #[test]
    fn tags_keep_duplicates_in_order() {
        assert_eq!(normalize_tags("a, B, a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn blank_tag_input_yields_nothing() {
        assert!(normalize_tags("").is_empty());
        assert!(normalize_tags(" , ,\t").is_empty());
    }

    #[test]
    fn normalized_tags_are_canonical() {
        let inputs = ["  A  b ,C\t\tD, , e ", "X,,Y", "\n tab\tbed \n"];
        for input in inputs {
            for tag in normalize_tags(input) {
                assert!(!tag.is_empty());
                assert_eq!(tag, tag.trim());
                assert!(!tag.contains("  "));
                assert!(!tag.contains('\t'));
                assert_eq!(tag, tag.to_lowercase());
            }
        }
    }

    #[test]
    fn canonical_text_trims_outer_whitespace_only() {
        assert_eq!(canonical_text("  hello   world \n"), "hello   world");
        assert_eq!(canonical_text(" \t\n "), "");
    }

    #[test]
    fn short_titles_are_untouched() {
        assert_eq!(title_of("  buy \n milk  ", DEFAULT_TITLE_WIDTH), "buy milk");
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let text = "a".repeat(50);
        let title = title_of(&text, DEFAULT_TITLE_WIDTH);
        assert_eq!(title.chars().count(), DEFAULT_TITLE_WIDTH + 1);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        let text = "é".repeat(42);
        assert_eq!(title_of(&text, 42), text);
    }

    #[test]
    fn import_tags_stringify_and_lowercase_only() {
        let values = vec![json!(" Work "), json!(42), json!(true), json!("A  B")];
        assert_eq!(import_tags(&values), vec![" work ", "42", "true", "a  b"]);
    }
}
