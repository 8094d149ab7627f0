//! React Native generators.
//!
//! Card, List and Link have no native mapping yet and return
//! [`NOT_IMPLEMENTED`].

use super::{event_handler, label, wrap_block, NATIVE_PLACEHOLDER_ELEMENT, NOT_IMPLEMENTED};
use crate::attributes::AttributeSet;
use trellis_core::Entity;
use trellis_style::NativeStyle;

const IMAGE_PLACEHOLDER_SRC: &str = "/placeholder.jpg";

/// `style` attribute first, when any class has a native equivalent.
fn style_attributes(entity: &Entity) -> AttributeSet {
    let mut attrs = AttributeSet::new();
    let style = NativeStyle::from_classes(&entity.classes);
    if !style.is_empty() {
        attrs.push_expression("style", style.to_string());
    }
    attrs
}

fn body_or(children: &[String], placeholder: &str) -> Vec<String> {
    if children.is_empty() {
        vec![format!("<{0}>{1}</{0}>", NATIVE_PLACEHOLDER_ELEMENT, placeholder)]
    } else {
        children.to_vec()
    }
}

fn keyboard_type(input_type: &str) -> Option<&'static str> {
    match input_type {
        "email" => Some("email-address"),
        "number" => Some("numeric"),
        "tel" => Some("phone-pad"),
        _ => None,
    }
}

pub(super) fn not_implemented(entity: &Entity, _children: &[String]) -> String {
    log::debug!("no native generator for {} '{}'", entity.kind, entity.id);
    NOT_IMPLEMENTED.to_string()
}

pub(super) fn page(entity: &Entity, children: &[String]) -> String {
    wrap_block("ScrollView", &style_attributes(entity), &body_or(children, "Page"))
}

pub(super) fn container(entity: &Entity, children: &[String]) -> String {
    wrap_block("View", &style_attributes(entity), &body_or(children, "Container"))
}

pub(super) fn text(entity: &Entity, _children: &[String]) -> String {
    format!("<Text{}>{}</Text>", style_attributes(entity), label(entity))
}

pub(super) fn button(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = style_attributes(entity);
    if let Some(handler) = event_handler(entity, "onClick", "Press") {
        attrs.push_expression("onPress", handler);
    }
    if entity.is_flag_set("disabled") {
        attrs.push_flag("disabled");
    }
    let inner = format!("<Text>{}</Text>", label(entity));
    wrap_block("TouchableOpacity", &attrs, &[inner])
}

pub(super) fn image(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = style_attributes(entity);
    let src = entity
        .text_property("src")
        .unwrap_or_else(|| IMAGE_PLACEHOLDER_SRC.to_string());
    attrs.push_expression("source", format!("{{ uri: \"{}\" }}", src));
    attrs.push_literal(
        "accessibilityLabel",
        entity
            .text_property("alt")
            .unwrap_or_else(|| entity.kind.display_name()),
    );
    format!("<Image{} />", attrs)
}

pub(super) fn input(entity: &Entity, _children: &[String]) -> String {
    let mut attrs = style_attributes(entity);
    for field in ["placeholder", "value"] {
        if let Some(value) = entity.text_property(field) {
            attrs.push_literal(field, value);
        }
    }
    if let Some(input_type) = entity.text_property("type") {
        if input_type == "password" {
            attrs.push_flag("secureTextEntry");
        } else if let Some(keyboard) = keyboard_type(&input_type) {
            attrs.push_literal("keyboardType", keyboard);
        }
    }
    if entity.is_flag_set("disabled") {
        attrs.push_expression("editable", "false");
    }
    format!("<TextInput{} />", attrs)
}
