//! Page blocks and partial pass-through against partial directories.

use std::fs;
use std::path::Path;
use std::sync::Once;

use lrd_helpers::{
    block_to_partial, labeled_input, page_block, set_headline, HelperConfig, LabeledInputOptions,
    PartialOptions, WriteMode,
};
use lrd_render::{BoundTarget, Markup, Partials, RenderContext, RenderError, ViewContext};
use tempfile::TempDir;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn write_partial(dir: &Path, relative: &str, source: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, source).unwrap();
}

#[test]
fn test_page_block_with_overridden_block_partial() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write_partial(
        dir.path(),
        "shared/_block.html.jinja",
        r#"<section class="{{ cssclass }}"><h3>{{ title }}</h3>{{ body }}</section>"#,
    );

    let mut partials = Partials::new();
    partials.add_partial_dir(dir.path()).unwrap();
    let mut ctx = ViewContext::new(&partials);

    let out = page_block(
        &mut ctx,
        &HelperConfig::default(),
        "Users",
        PartialOptions::new().class("boxed"),
        |ctx| {
            ctx.append(&Markup::raw("<p>two</p>"));
            Ok(Markup::new())
        },
    )
    .unwrap();

    assert_eq!(
        out.as_str(),
        r#"<section class="boxed"><h3>Users</h3><p>two</p></section>"#
    );
}

#[test]
fn test_page_block_with_configured_partial_name() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write_partial(
        dir.path(),
        "layouts/_panel.html",
        r#"<aside{% if cssid %} id="{{ cssid }}"{% endif %}>{{ title }}: {{ body }}</aside>"#,
    );

    let mut partials = Partials::new();
    partials.add_partial_dir(dir.path()).unwrap();
    let mut ctx = ViewContext::new(&partials);
    let config = HelperConfig::from_yaml("block_partial: layouts/panel\n").unwrap();

    let out = page_block(
        &mut ctx,
        &config,
        "Stats & more",
        PartialOptions::new().id("stats"),
        |_| Ok(Markup::raw("<b>42</b>")),
    )
    .unwrap();

    assert_eq!(
        out.as_str(),
        r#"<aside id="stats">Stats &amp; more: <b>42</b></aside>"#
    );
}

#[test]
fn test_block_to_partial_passes_locals() {
    let mut partials = Partials::new();
    partials
        .add_partial(
            "users/card",
            "<div class=\"card {{ cssclass }}\">{% for tag in tags %}<i>{{ tag }}</i>{% endfor %}{{ body }}</div>",
        )
        .unwrap();
    let mut ctx = ViewContext::new(&partials);

    let out = block_to_partial(
        &mut ctx,
        &HelperConfig::default(),
        "users/card",
        PartialOptions::new()
            .class("compact")
            .local("tags", serde_json::json!(["a", "<b>"])),
        |_| Ok(Markup::escape("bob")),
    )
    .unwrap();

    assert_eq!(
        out.as_str(),
        r#"<div class="card compact"><i>a</i><i>&lt;b&gt;</i>bob</div>"#
    );
}

#[test]
fn test_block_error_propagates_and_restores_buffer() {
    let partials = Partials::new();
    let mut ctx = ViewContext::new(&partials);
    ctx.append(&Markup::raw("<main>"));

    let err = page_block(
        &mut ctx,
        &HelperConfig::default(),
        "Broken",
        PartialOptions::new(),
        |ctx| {
            ctx.append(&Markup::raw("half"));
            LabeledInputOptions::new().field_type("bogus")?;
            Ok(Markup::new())
        },
    )
    .unwrap_err();

    assert!(matches!(err, RenderError::InvalidFieldType { ref value } if value == "bogus"));
    assert!(err.to_string().contains("bogus"));
    assert_eq!(ctx.output().as_str(), "<main>");
}

#[test]
fn test_append_mode_builds_page_in_buffer() {
    init_tracing();
    let mut partials = Partials::new();
    partials
        .add_partial("layout", "<h1>{{ headline }}</h1>{{ body }}")
        .unwrap();
    let mut ctx = ViewContext::new(&partials);
    let config = HelperConfig::default().with_write_mode(WriteMode::AppendToActiveContext);
    let user = BoundTarget::new("user");

    set_headline(&mut ctx, &config, "New user");
    let returned = page_block(&mut ctx, &config, "Account", PartialOptions::new(), |ctx| {
        labeled_input(ctx, &config, Some(&user), "login", LabeledInputOptions::new())?;
        Ok(Markup::new())
    })
    .unwrap();
    assert!(returned.is_empty());

    let body = ctx.take_output();
    let page = ctx.render_layout("layout", body).unwrap();
    assert_eq!(
        page.as_str(),
        concat!(
            "<h1>New user</h1>",
            r#"<div class="page_block"><h2 class="page_block_title">Account</h2>"#,
            r#"<div class="page_block_body"><div class="labeled_input">"#,
            r#"<label for="user_login">Login</label>"#,
            r#"<input type="text" id="user_login" name="user[login]" /></div></div></div>"#,
        )
    );
}
