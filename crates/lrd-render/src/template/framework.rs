//! Framework-supplied partials.
//!
//! These are the lowest-priority partials: an inline partial or a partial
//! file with the same name replaces them.

/// Built-in partials as `(name, source)` pairs.
pub const FRAMEWORK_PARTIALS: &[(&str, &str)] = &[("shared/block", BLOCK_PARTIAL)];

/// Titled, bordered box around captured content.
///
/// Locals:
/// - `title`: optional heading text
/// - `cssid`: element id, empty for none
/// - `cssclass`: extra class names, empty for none
/// - `body`: the captured content
const BLOCK_PARTIAL: &str = concat!(
    r#"<div class="page_block{% if cssclass %} {{ cssclass }}{% endif %}"{% if cssid %} id="{{ cssid }}"{% endif %}>"#,
    r#"{% if title %}<h2 class="page_block_title">{{ title }}</h2>{% endif %}"#,
    r#"<div class="page_block_body">{{ body }}</div>"#,
    r#"</div>"#,
);
