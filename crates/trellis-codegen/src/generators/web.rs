//! React DOM generators.

use super::{event_handler, label, wrap_block};
use crate::attributes::AttributeSet;
use trellis_core::Entity;

const IMAGE_PLACEHOLDER_SRC: &str = "/placeholder.jpg";
const LIST_PLACEHOLDER: [&str; 3] = ["<li>Item 1</li>", "<li>Item 2</li>", "<li>Item 3</li>"];

/// `className` attribute first, when the entity has classes.
///
/// Tokens are kept verbatim, bracket values included. Arbitrary values are
/// only resolved on the native path, so `filter_non_arbitrary_classes` and
/// `partition_classes` are not applied here.
fn class_attributes(entity: &Entity) -> AttributeSet {
    let mut attrs = AttributeSet::new();
    if !entity.classes.is_empty() {
        attrs.push_literal("className", entity.classes.join(" "));
    }
    attrs
}

fn body_or(children: &[String], placeholder: &str) -> Vec<String> {
    if children.is_empty() {
        vec![placeholder.to_string()]
    } else {
        children.to_vec()
    }
}

pub(super) fn page(entity: &Entity, children: &[String]) -> String {
    wrap_block("main", &class_attributes(entity), &body_or(children, "Page"))
}

pub(super) fn container(entity: &Entity, children: &[String]) -> String {
    wrap_block("div", &class_attributes(entity), &body_or(children, "Container"))
}

pub(super) fn card(entity: &Entity, children: &[String]) -> String {
    let mut body = Vec::new();
    if let Some(title) = entity.text_property("title") {
        body.push(format!("<h3>{}</h3>", title));
    }
    if children.is_empty() {
        body.push(
            entity
                .text_property("text")
                .unwrap_or_else(|| "Card Content".to_string()),
        );
    } else {
        body.extend_from_slice(children);
    }
    wrap_block("div", &class_attributes(entity), &body)
}

pub(super) fn list(entity: &Entity, children: &[String]) -> String {
    let tag = if entity.is_flag_set("ordered") { "ol" } else { "ul" };
    if children.is_empty() {
        wrap_block(tag, &class_attributes(entity), &LIST_PLACEHOLDER)
    } else {
        wrap_block(tag, &class_attributes(entity), children)
    }
}

pub(super) fn button(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = class_attributes(entity);
    if let Some(button_type) = entity.text_property("type") {
        attrs.push_literal("type", button_type);
    }
    if let Some(handler) = event_handler(entity, "onClick", "Click") {
        attrs.push_expression("onClick", handler);
    }
    if entity.is_flag_set("disabled") {
        attrs.push_flag("disabled");
    }
    format!("<button{}>{}</button>", attrs, label(entity))
}

pub(super) fn text(entity: &Entity, _children: &[String]) -> String {
    format!("<p{}>{}</p>", class_attributes(entity), label(entity))
}

pub(super) fn link(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = class_attributes(entity);
    attrs.push_literal("href", entity.text_property("href").unwrap_or_else(|| "#".to_string()));
    if let Some(target) = entity.text_property("target") {
        let blank = target == "_blank";
        attrs.push_literal("target", target);
        if blank {
            attrs.push_literal("rel", "noopener noreferrer");
        }
    }
    format!("<a{}>{}</a>", attrs, label(entity))
}

pub(super) fn image(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = class_attributes(entity);
    attrs.push_literal(
        "src",
        entity
            .text_property("src")
            .unwrap_or_else(|| IMAGE_PLACEHOLDER_SRC.to_string()),
    );
    attrs.push_literal(
        "alt",
        entity
            .text_property("alt")
            .unwrap_or_else(|| entity.kind.display_name()),
    );
    for dimension in ["width", "height"] {
        if let Some(value) = entity.property(dimension) {
            attrs.push_property(dimension, value);
        }
    }
    format!("<img{} />", attrs)
}

pub(super) fn input(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = class_attributes(entity);
    for field in ["type", "name", "placeholder", "value"] {
        if let Some(value) = entity.text_property(field) {
            attrs.push_literal(field, value);
        }
    }
    for flag in ["disabled", "required"] {
        if entity.is_flag_set(flag) {
            attrs.push_flag(flag);
        }
    }
    format!("<input{} />", attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ComponentKind;

    fn button_markup(entity: &Entity) -> String {
        button(entity, &[])
    }

    #[test]
    fn test_class_attribute_keeps_arbitrary_tokens() {
        let text_entity = Entity::new("t", ComponentKind::Text)
            .with_classes("p-[24px] font-bold w-[50%]")
            .with_property("text", "Hi");
        assert_eq!(
            text(&text_entity, &[]),
            r#"<p className="p-[24px] font-bold w-[50%]">Hi</p>"#
        );
    }

    #[test]
    fn test_button_attribute_order() {
        let button = Entity::new("b", ComponentKind::Button)
            .with_property("disabled", true)
            .with_property("type", "submit");
        assert_eq!(button_markup(&button), r#"<button type="submit" disabled>Button</button>"#);
    }

    #[test]
    fn test_button_with_classes_and_handler() {
        let button = Entity::new("b", ComponentKind::Button)
            .with_classes("px-4 py-2 rounded")
            .with_property("text", "Save")
            .with_property("onClick", "save");
        assert_eq!(
            button_markup(&button),
            r#"<button className="px-4 py-2 rounded" onClick={handleSave}>Save</button>"#
        );
    }

    #[test]
    fn test_image_defaults() {
        let image_entity = Entity::new("i", ComponentKind::Image);
        assert_eq!(
            image(&image_entity, &[]),
            r#"<img src="/placeholder.jpg" alt="Image" />"#
        );

        let sized = Entity::new("i", ComponentKind::Image)
            .with_class("rounded-full")
            .with_property("height", 48)
            .with_property("src", "/avatar.png")
            .with_property("width", "48");
        assert_eq!(
            image(&sized, &[]),
            r#"<img className="rounded-full" src="/avatar.png" alt="Image" width="48" height={48} />"#
        );
    }

    #[test]
    fn test_input_fields() {
        let field = Entity::new("email", ComponentKind::Input)
            .with_property("required", true)
            .with_property("placeholder", "you@example.com")
            .with_property("type", "email")
            .with_property("disabled", false);
        assert_eq!(
            input(&field, &[]),
            r#"<input type="email" placeholder="you@example.com" required />"#
        );

        let filled = Entity::new("qty", ComponentKind::Input)
            .with_class("w-[80px]")
            .with_property("disabled", true)
            .with_property("value", 3)
            .with_property("placeholder", "Qty")
            .with_property("name", "quantity")
            .with_property("type", "number");
        assert_eq!(
            input(&filled, &[]),
            r#"<input className="w-[80px]" type="number" name="quantity" placeholder="Qty" value="3" disabled />"#
        );
    }

    #[test]
    fn test_link_blank_target() {
        let anchor = Entity::new("l", ComponentKind::Link)
            .with_property("href", "https://example.com")
            .with_property("target", "_blank")
            .with_property("text", "Docs");
        assert_eq!(
            link(&anchor, &[]),
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">Docs</a>"#
        );
        assert_eq!(link(&Entity::new("l", ComponentKind::Link), &[]), r##"<a href="#">Link</a>"##);
    }

    #[test]
    fn test_text_content() {
        let paragraph = Entity::new("t", ComponentKind::Text).with_property("children", "Hello");
        assert_eq!(text(&paragraph, &[]), "<p>Hello</p>");
        assert_eq!(text(&Entity::new("t", ComponentKind::Text), &[]), "<p>Text</p>");
    }

    #[test]
    fn test_container_placeholder() {
        let div = Entity::new("c", ComponentKind::Container).with_class("flex");
        assert_eq!(container(&div, &[]), "<div className=\"flex\">\n  Container\n</div>");
    }

    #[test]
    fn test_container_children() {
        let div = Entity::new("c", ComponentKind::Container);
        let children = vec!["<p>One</p>".to_string(), "<p>Two</p>".to_string()];
        insta::assert_snapshot!(container(&div, &children), @r#"
        <div>
          <p>One</p>
          <p>Two</p>
        </div>
        "#);
    }

    #[test]
    fn test_list_placeholder() {
        let ordered = Entity::new("l", ComponentKind::List).with_property("ordered", true);
        insta::assert_snapshot!(list(&ordered, &[]), @r#"
        <ol>
          <li>Item 1</li>
          <li>Item 2</li>
          <li>Item 3</li>
        </ol>
        "#);
    }

    #[test]
    fn test_card_placeholder_and_title() {
        let plain = Entity::new("c", ComponentKind::Card);
        assert_eq!(card(&plain, &[]), "<div>\n  Card Content\n</div>");

        let titled = Entity::new("c", ComponentKind::Card)
            .with_class("shadow-md")
            .with_property("title", "Plan")
            .with_property("text", "Free tier");
        assert_eq!(
            card(&titled, &[]),
            "<div className=\"shadow-md\">\n  <h3>Plan</h3>\n  Free tier\n</div>"
        );
    }

    #[test]
    fn test_page_placeholder() {
        assert_eq!(page(&Entity::new("p", ComponentKind::Page), &[]), "<main>\n  Page\n</main>");
    }
}
