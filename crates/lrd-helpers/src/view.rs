//! Headline slot and boolean indicator.

use lrd_render::{image_tag, Attributes, Markup, RenderContext};

use crate::config::HelperConfig;

/// Stores a headline for the layout to render. The last call wins.
pub fn set_headline(ctx: &mut dyn RenderContext, config: &HelperConfig, text: &str) {
    ctx.set_content(&config.headline_slot, Markup::escape(text));
}

/// The stored headline, if any.
pub fn headline<'c>(ctx: &'c dyn RenderContext, config: &HelperConfig) -> Option<&'c Markup> {
    ctx.content(&config.headline_slot)
}

/// A check mark image for `true`, a blank image for `false`.
pub fn bool_checked(config: &HelperConfig, flag: bool) -> Markup {
    let icon = if flag {
        &config.checked_icon
    } else {
        &config.unchecked_icon
    };
    let size = config.icon_size.to_string();
    image_tag(
        &config.image_path(icon),
        Attributes::new()
            .with("alt", "yes")
            .with("width", size.as_str())
            .with("height", size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrd_render::{Partials, ViewContext};

    #[test]
    fn headline_last_write_wins() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig::default();

        assert!(headline(&ctx, &config).is_none());
        set_headline(&mut ctx, &config, "Users");
        set_headline(&mut ctx, &config, "Edit <user>");
        assert_eq!(
            headline(&ctx, &config).map(Markup::as_str),
            Some("Edit &lt;user&gt;")
        );
    }

    #[test]
    fn headline_uses_configured_slot() {
        let partials = Partials::new();
        let mut ctx = ViewContext::new(&partials);
        let config = HelperConfig {
            headline_slot: "title".to_string(),
            ..HelperConfig::default()
        };
        set_headline(&mut ctx, &config, "Users");
        assert_eq!(ctx.content("title").map(Markup::as_str), Some("Users"));
    }

    #[test]
    fn bool_checked_images() {
        let config = HelperConfig::default();
        assert_eq!(
            bool_checked(&config, true).as_str(),
            r#"<img src="/images/check.png" alt="yes" width="16" height="16" />"#
        );
        assert_eq!(
            bool_checked(&config, false).as_str(),
            r#"<img src="/images/blank.gif" alt="yes" width="16" height="16" />"#
        );
    }
}
