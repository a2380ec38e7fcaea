//! Collapsible debug output.
//!
//! [`debug_block`] renders a hidden fieldset and [`debug_link`] a link that
//! toggles it. The two are paired by name through [`debug_info_id`].

use lrd_render::context::capture;
use lrd_render::inflect::{sanitize_id, titleize};
use lrd_render::{content_tag, link_to, Attributes, Markup, RenderContext, Result};

use crate::config::HelperConfig;

/// Element id shared by a debug block and its link.
pub fn debug_info_id(name: &str) -> String {
    format!("{}_debug_info", sanitize_id(name))
}

/// Captures `block` into a fieldset that starts hidden.
pub fn debug_block<F>(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    name: &str,
    block: F,
) -> Result<Markup>
where
    F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
{
    let content = capture(ctx, block)?;
    let heading = content_tag("h2", &Markup::escape(&titleize(name)), &Attributes::new());
    let out = content_tag(
        "fieldset",
        &(heading + content),
        &Attributes::new()
            .with("id", debug_info_id(name))
            .with("style", "display: none;"),
    );
    Ok(config.write_mode.emit(ctx, out))
}

/// A link that shows or hides the debug block called `name`.
pub fn debug_link(name: &str) -> Markup {
    let onclick = format!("Element.toggle('{}'); return false;", debug_info_id(name));
    link_to(&titleize(name), "#", Attributes::new().with("onclick", onclick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrd_render::{Partials, ViewContext};

    #[test]
    fn ids_match() {
        assert_eq!(debug_info_id("cache"), "cache_debug_info");
        assert_eq!(debug_info_id("session store"), "session_store_debug_info");
    }

    #[test]
    fn block_is_hidden_fieldset() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let out = debug_block(&mut ctx, &HelperConfig::default(), "cache", |ctx| {
            ctx.append(&Markup::escape("hits: 3 < 4"));
            Ok(Markup::new())
        })
        .unwrap();
        assert_eq!(
            out.as_str(),
            r#"<fieldset id="cache_debug_info" style="display: none;"><h2>Cache</h2>hits: 3 &lt; 4</fieldset>"#
        );
    }

    #[test]
    fn link_toggles_block() {
        assert_eq!(
            debug_link("session_store").as_str(),
            concat!(
                r##"<a href="#" onclick="Element.toggle(&#39;session_store_debug_info&#39;); return false;">"##,
                "Session Store</a>"
            )
        );
    }
}
