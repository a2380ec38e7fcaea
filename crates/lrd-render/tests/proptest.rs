use lrd_render::{escape_html, Attributes, Markup};
use proptest::prelude::*;

fn class_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_-]{0,8}", 0..5)
}

proptest! {
    #[test]
    fn test_escape_html_leaves_no_raw_specials(text in "\\PC*") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        let stripped = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&#39;", "");
        prop_assert!(!stripped.contains('&'));
    }

    #[test]
    fn test_markup_escape_matches_escape_html(text in "\\PC*") {
        prop_assert_eq!(Markup::escape(&text).into_string(), escape_html(&text));
    }

    #[test]
    fn test_append_class_keeps_existing_tokens(
        existing in class_tokens(),
        added in "[a-z]{1,8}",
    ) {
        let mut attrs = Attributes::new();
        if !existing.is_empty() {
            attrs.set("class", existing.join(" "));
        }
        attrs.append_class(&added);

        let class = attrs.get("class").unwrap_or_default();
        let tokens: Vec<&str> = class.split(' ').collect();
        let kept: Vec<&str> = existing.iter().map(String::as_str).collect();
        prop_assert_eq!(&tokens[..existing.len()], kept.as_slice());
        prop_assert_eq!(tokens.last().copied(), Some(added.as_str()));
        prop_assert_eq!(tokens.len(), existing.len() + 1);
    }

    #[test]
    fn test_attribute_values_render_escaped(value in "\\PC*") {
        let html = Attributes::new().with("title", value.clone()).to_html();
        prop_assert_eq!(html, format!(" title=\"{}\"", escape_html(&value)));
    }
}
