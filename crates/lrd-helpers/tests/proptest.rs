use lrd_helpers::{container_class, labeled_input, HelperConfig, LabeledInputOptions};
use lrd_render::{BoundTarget, FieldKind, Partials, ViewContext};
use proptest::prelude::*;
use serde_json::json;

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    proptest::sample::select(FieldKind::ALL.to_vec())
}

fn render(field: &str, options: LabeledInputOptions) -> String {
    let partials = Partials::new();
    let mut ctx = ViewContext::new(&partials);
    let user = BoundTarget::from_value("user", json!({"login": "bob", "age": 7}));
    labeled_input(&mut ctx, &HelperConfig::default(), Some(&user), field, options)
        .unwrap()
        .into_string()
}

proptest! {
    #[test]
    fn test_container_class_order(
        required in any::<bool>(),
        custom in proptest::option::of("[a-z]{1,8}"),
    ) {
        let config = HelperConfig::default();
        let class = container_class(&config, required, custom.as_deref());
        let tokens: Vec<&str> = class.split(' ').collect();

        prop_assert_eq!(tokens[0], "labeled_input");
        prop_assert_eq!(tokens.contains(&"required"), required);
        if let Some(custom) = &custom {
            prop_assert_eq!(tokens.last().copied(), Some(custom.as_str()));
        }
        let expected = 1 + usize::from(required) + usize::from(custom.is_some());
        prop_assert_eq!(tokens.len(), expected);
    }

    #[test]
    fn test_render_is_idempotent(
        kind in kind_strategy(),
        field in "[a-z_]{0,10}",
        required in any::<bool>(),
        comment in proptest::option::of("[ -~]{0,20}"),
    ) {
        let build = || {
            let mut options = LabeledInputOptions::new().kind(kind).required(required);
            if let Some(comment) = &comment {
                options = options.comment(comment.clone());
            }
            options
        };
        prop_assert_eq!(render(&field, build()), render(&field, build()));
    }

    #[test]
    fn test_required_never_removes_classes(kind in kind_strategy(), class in "[a-z]{1,8}") {
        prop_assume!(kind != FieldKind::Submit);
        let options = LabeledInputOptions::new()
            .kind(kind)
            .required(true)
            .attr("class", class.clone());
        let out = render("login", options);
        let expected = format!(r#"class="{} required""#, class);
        prop_assert!(out.contains(&expected));
    }

    #[test]
    fn test_input_never_contains_comment_or_label(kind in kind_strategy()) {
        let out = render("login", LabeledInputOptions::new().kind(kind).comment("note"));
        prop_assert_eq!(out.matches("<label").count(), 1);
        prop_assert_eq!(out.matches("<span").count(), 1);
        prop_assert!(out.ends_with(r#"<span class="comment">note</span></div>"#));
    }
}
