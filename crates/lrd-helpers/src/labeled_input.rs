//! Labeled-input rows.
//!
//! A row is a container `<div>` holding a label, an input and an optional
//! trailing comment:
//!
//! ```text
//! <div class="labeled_input required wide">
//!   <label for="user_login">Login</label>
//!   <input type="text" id="user_login" name="user[login]" class="required" />
//!   <span class="comment">Required field</span>
//! </div>
//! ```
//!
//! (Shown indented; the rendered row has no whitespace between elements.)
//!
//! The label depends on the binding: rows with no target or a blank field
//! name get a placeholder `<label>&nbsp;</label>`, so unbound rows such as
//! submit buttons line up with the rest of the form.

use lrd_render::context::capture;
use lrd_render::form::label;
use lrd_render::{
    content_tag, Attributes, Binding, BoundTarget, FieldKind, Markup, RenderContext, Result,
};

use crate::config::HelperConfig;
use crate::options::{InputSource, LabeledInputOptions};

/// Renders a labeled-input row.
///
/// `target` and `field` select what the input is bound to. Pass `None` or a
/// blank field for an unbound row.
pub fn labeled_input(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    target: Option<&BoundTarget>,
    field: &str,
    options: LabeledInputOptions,
) -> Result<Markup> {
    let row = build_row(config, target, field, options, None);
    Ok(config.write_mode.emit(ctx, row))
}

/// Renders a labeled-input row whose input is the output of `block`.
///
/// The captured markup replaces whatever [`LabeledInputOptions::input`] says.
pub fn labeled_input_with<F>(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    target: Option<&BoundTarget>,
    field: &str,
    options: LabeledInputOptions,
    block: F,
) -> Result<Markup>
where
    F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
{
    let inline = capture(ctx, block)?;
    let row = build_row(config, target, field, options, Some(inline));
    Ok(config.write_mode.emit(ctx, row))
}

/// A labeled-input row whose label carries no text.
pub fn unlabeled_input(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    target: Option<&BoundTarget>,
    field: &str,
    options: LabeledInputOptions,
) -> Result<Markup> {
    labeled_input(ctx, config, target, field, options.label(false))
}

/// A submit button in an unbound row.
///
/// A pre-built control in [`LabeledInputOptions::input`] is used as given.
/// Otherwise a submit input is built, and `text` of `None` falls back to the
/// options' submit text, then to the configured default.
pub fn unlabeled_submit(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    text: Option<&str>,
    options: LabeledInputOptions,
) -> Result<Markup> {
    let mut options = if matches!(options.input, InputSource::Override(_)) {
        options
    } else {
        options.kind(FieldKind::Submit)
    };
    if let Some(text) = text {
        options.submit_text = Some(text.to_string());
    }
    labeled_input(ctx, config, None, "", options)
}

fn build_row(
    config: &HelperConfig,
    target: Option<&BoundTarget>,
    field: &str,
    options: LabeledInputOptions,
    inline: Option<Markup>,
) -> Markup {
    let binding = target
        .filter(|_| !field.trim().is_empty())
        .map(|target| target.bind(field));

    let class = container_class(config, options.required, options.container_class.as_deref());
    let comment = comment_fragment(config, options.comment.as_deref());
    let label = label_fragment(binding, options.label, options.text.as_deref());
    let input = match inline {
        Some(markup) => markup,
        None => input_fragment(config, binding, options),
    };

    content_tag(
        "div",
        &(label + input + comment),
        &Attributes::new().with("class", class),
    )
}

/// Container classes: base, then required, then custom.
pub fn container_class(config: &HelperConfig, required: bool, custom: Option<&str>) -> String {
    let mut classes = vec![config.container_class.as_str()];
    if required {
        classes.push(config.required_class.as_str());
    }
    if let Some(custom) = custom.map(str::trim).filter(|c| !c.is_empty()) {
        classes.push(custom);
    }
    classes.join(" ")
}

fn comment_fragment(config: &HelperConfig, comment: Option<&str>) -> Markup {
    match comment.filter(|c| !c.is_empty()) {
        Some(text) => content_tag(
            "span",
            &Markup::escape(text),
            &Attributes::new().with("class", config.comment_class.as_str()),
        ),
        None => Markup::new(),
    }
}

fn label_fragment(binding: Option<Binding<'_>>, show_text: bool, text: Option<&str>) -> Markup {
    match binding {
        None => content_tag("label", &Markup::nbsp(), &Attributes::new()),
        Some(binding) if !show_text => label(binding, Some(Markup::new()), Attributes::new()),
        Some(binding) => label(binding, text.map(Markup::escape), Attributes::new()),
    }
}

fn input_fragment(
    config: &HelperConfig,
    binding: Option<Binding<'_>>,
    options: LabeledInputOptions,
) -> Markup {
    let kind = match options.input {
        InputSource::Override(markup) => return markup,
        InputSource::Field(kind) => kind,
    };

    let mut attrs = options.attributes;
    if options.required {
        attrs.append_class(&config.required_class);
    }
    if kind.accepts_size() {
        if let Some(size) = config.default_input_size {
            attrs.set_default("size", size.to_string());
        }
    }
    if kind == FieldKind::Submit {
        match options.submit_text {
            Some(text) => attrs.set("value", text),
            None => attrs.set_default("value", config.submit_text.as_str()),
        }
    }
    kind.build(binding, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriteMode;
    use lrd_render::{Partials, RenderError, ViewContext};
    use serde_json::json;

    fn user() -> BoundTarget {
        BoundTarget::from_value("user", json!({"login": "bob", "first_name": "Bob"}))
    }

    fn render(target: Option<&BoundTarget>, field: &str, options: LabeledInputOptions) -> String {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        labeled_input(&mut ctx, &HelperConfig::default(), target, field, options)
            .unwrap()
            .into_string()
    }

    #[test]
    fn basic_row() {
        let target = user();
        assert_eq!(
            render(Some(&target), "login", LabeledInputOptions::new()),
            concat!(
                r#"<div class="labeled_input">"#,
                r#"<label for="user_login">Login</label>"#,
                r#"<input type="text" id="user_login" name="user[login]" value="bob" />"#,
                "</div>"
            )
        );
    }

    #[test]
    fn label_text_is_humanized_or_overridden() {
        let target = user();
        let out = render(Some(&target), "first_name", LabeledInputOptions::new());
        assert!(out.contains(r#"<label for="user_first_name">First name</label>"#));

        let out = render(
            Some(&target),
            "first_name",
            LabeledInputOptions::new().text("Given <name>"),
        );
        assert!(out.contains(r#"<label for="user_first_name">Given &lt;name&gt;</label>"#));
    }

    #[test]
    fn label_false_keeps_association() {
        let target = user();
        let out = render(Some(&target), "login", LabeledInputOptions::new().label(false));
        assert!(out.contains(r#"<label for="user_login"></label>"#));
    }

    #[test]
    fn blank_field_gets_placeholder_label() {
        let target = user();
        for field in ["", "   "] {
            let out = render(Some(&target), field, LabeledInputOptions::new());
            assert!(out.starts_with(r#"<div class="labeled_input"><label>&nbsp;</label>"#));
            assert!(out.contains(r#"<input type="text" />"#));
        }
    }

    #[test]
    fn missing_target_gets_placeholder_label() {
        let out = render(None, "login", LabeledInputOptions::new());
        assert!(out.contains("<label>&nbsp;</label>"));
        assert!(!out.contains("for="));
    }

    #[test]
    fn required_is_additive() {
        let target = user();
        let out = render(
            Some(&target),
            "login",
            LabeledInputOptions::new()
                .required(true)
                .container_class("wide")
                .attr("class", "mono"),
        );
        assert!(out.starts_with(r#"<div class="labeled_input required wide">"#));
        assert!(out.contains(r#"class="mono required""#));
    }

    #[test]
    fn comment_is_escaped_and_trailing() {
        let target = user();
        let out = render(
            Some(&target),
            "login",
            LabeledInputOptions::new().comment("a & b"),
        );
        assert!(out.ends_with(r#"<span class="comment">a &amp; b</span></div>"#));

        let out = render(Some(&target), "login", LabeledInputOptions::new().comment(""));
        assert!(!out.contains("<span"));
    }

    #[test]
    fn override_input_is_verbatim() {
        let target = user();
        let out = render(
            Some(&target),
            "role",
            LabeledInputOptions::new()
                .required(true)
                .input(Markup::raw("<select id=\"user_role\"></select>")),
        );
        assert!(out.contains(concat!(
            r#"<label for="user_role">Role</label>"#,
            r#"<select id="user_role"></select>"#
        )));
    }

    #[test]
    fn inline_block_wins_over_override() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let target = user();
        let out = labeled_input_with(
            &mut ctx,
            &HelperConfig::default(),
            Some(&target),
            "login",
            LabeledInputOptions::new().input(Markup::raw("<b>ignored</b>")),
            |ctx| {
                ctx.append(&Markup::raw("<em>inline</em>"));
                Ok(Markup::new())
            },
        )
        .unwrap();
        assert!(out.as_str().contains("<em>inline</em>"));
        assert!(!out.as_str().contains("ignored"));
        assert!(ctx.output().is_empty());
    }

    #[test]
    fn default_input_size_applies_to_text_like_kinds() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig::default().with_default_input_size(30);
        let target = user();

        let out = labeled_input(
            &mut ctx,
            &config,
            Some(&target),
            "login",
            LabeledInputOptions::new(),
        )
        .unwrap();
        assert!(out.as_str().contains(r#"size="30""#));

        let out = labeled_input(
            &mut ctx,
            &config,
            Some(&target),
            "login",
            LabeledInputOptions::new().attr("size", "10"),
        )
        .unwrap();
        assert!(out.as_str().contains(r#"size="10""#));
        assert!(!out.as_str().contains(r#"size="30""#));

        let out = labeled_input(
            &mut ctx,
            &config,
            Some(&target),
            "login",
            LabeledInputOptions::new().kind(FieldKind::Hidden),
        )
        .unwrap();
        assert!(!out.as_str().contains("size="));
    }

    #[test]
    fn unlabeled_input_has_empty_label() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let target = user();
        let out = unlabeled_input(
            &mut ctx,
            &HelperConfig::default(),
            Some(&target),
            "login",
            LabeledInputOptions::new().text("ignored"),
        )
        .unwrap();
        assert!(out.as_str().contains(r#"<label for="user_login"></label>"#));
    }

    #[test]
    fn submit_row() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig::default();

        let out = unlabeled_submit(&mut ctx, &config, Some("Save"), LabeledInputOptions::new())
            .unwrap();
        assert_eq!(
            out.as_str(),
            concat!(
                r#"<div class="labeled_input"><label>&nbsp;</label>"#,
                r#"<input type="submit" name="commit" value="Save" /></div>"#
            )
        );

        let out = unlabeled_submit(&mut ctx, &config, None, LabeledInputOptions::new()).unwrap();
        assert!(out.as_str().contains(r#"value="Save changes""#));

        let out = unlabeled_submit(
            &mut ctx,
            &config,
            None,
            LabeledInputOptions::new().submit_text("Create"),
        )
        .unwrap();
        assert!(out.as_str().contains(r#"value="Create""#));
    }

    #[test]
    fn submit_row_keeps_prebuilt_control() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let out = unlabeled_submit(
            &mut ctx,
            &HelperConfig::default(),
            None,
            LabeledInputOptions::new().input(Markup::raw("<button>Go</button>")),
        )
        .unwrap();
        assert_eq!(
            out.as_str(),
            r#"<div class="labeled_input"><label>&nbsp;</label><button>Go</button></div>"#
        );
    }

    #[test]
    fn append_mode_writes_to_buffer() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig::default().with_write_mode(WriteMode::AppendToActiveContext);
        let target = user();

        let returned =
            labeled_input(&mut ctx, &config, Some(&target), "login", LabeledInputOptions::new())
                .unwrap();
        assert!(returned.is_empty());
        assert!(ctx.output().as_str().starts_with(r#"<div class="labeled_input">"#));
    }

    #[test]
    fn failing_block_emits_nothing() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig::default().with_write_mode(WriteMode::AppendToActiveContext);
        let result = labeled_input_with(
            &mut ctx,
            &config,
            None,
            "",
            LabeledInputOptions::new(),
            |_| Err(RenderError::invalid_field_type("bogus")),
        );
        assert!(result.is_err());
        assert!(ctx.output().is_empty());
    }

    #[test]
    fn container_class_order() {
        let config = HelperConfig::default();
        assert_eq!(container_class(&config, false, None), "labeled_input");
        assert_eq!(container_class(&config, true, None), "labeled_input required");
        assert_eq!(
            container_class(&config, true, Some("wide")),
            "labeled_input required wide"
        );
        assert_eq!(container_class(&config, false, Some("  ")), "labeled_input");
    }
}
