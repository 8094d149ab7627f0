//! Per-component code generators.
//!
//! Every (component kind, platform) pair has exactly one entry in a static
//! table. A generator receives the entity and the markup already generated
//! for its children, and returns the markup for the entity.

mod native;
mod templates;
mod web;

pub use templates::{TemplateEngine, COMPONENT_TEMPLATE};

use crate::attributes::AttributeSet;
use convert_case::{Case, Casing};
use trellis_core::{ComponentKind, Entity, Platform, PropertyValue};
use trellis_style::NativeStyle;

/// Markup returned by generators that have not been ported to a platform.
pub const NOT_IMPLEMENTED: &str = "not implemented yet";

/// Native element wrapping container placeholder text.
pub const NATIVE_PLACEHOLDER_ELEMENT: &str = "Text";

/// Indentation for one nesting level.
pub(crate) const INDENT: &str = "  ";

/// Signature shared by all generators.
pub type GenerateFn = fn(&Entity, &[String]) -> String;

/// One row of the generator table.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorEntry {
    /// Component kind handled.
    pub kind: ComponentKind,
    /// Target platform.
    pub platform: Platform,
    /// Element emitted, `None` for unported generators.
    pub element: Option<&'static str>,
    /// React Native components the markup always references besides
    /// `element`. Placeholder bodies are not included.
    pub imports: &'static [&'static str],
    /// Generator function.
    pub generate: GenerateFn,
}

impl GeneratorEntry {
    /// Whether the generator produces real markup.
    pub fn is_ported(&self) -> bool {
        self.element.is_some()
    }
}

static GENERATORS: &[GeneratorEntry] = &[
    // Web
    entry(ComponentKind::Page, Platform::Web, Some("main"), &[], web::page),
    entry(ComponentKind::Container, Platform::Web, Some("div"), &[], web::container),
    entry(ComponentKind::Card, Platform::Web, Some("div"), &[], web::card),
    entry(ComponentKind::List, Platform::Web, Some("ul"), &[], web::list),
    entry(ComponentKind::Button, Platform::Web, Some("button"), &[], web::button),
    entry(ComponentKind::Text, Platform::Web, Some("p"), &[], web::text),
    entry(ComponentKind::Link, Platform::Web, Some("a"), &[], web::link),
    entry(ComponentKind::Image, Platform::Web, Some("img"), &[], web::image),
    entry(ComponentKind::Input, Platform::Web, Some("input"), &[], web::input),
    // Native
    entry(ComponentKind::Page, Platform::Native, Some("ScrollView"), &[], native::page),
    entry(ComponentKind::Container, Platform::Native, Some("View"), &[], native::container),
    entry(ComponentKind::Card, Platform::Native, None, &[], native::not_implemented),
    entry(ComponentKind::List, Platform::Native, None, &[], native::not_implemented),
    entry(ComponentKind::Button, Platform::Native, Some("TouchableOpacity"), &["Text"], native::button),
    entry(ComponentKind::Text, Platform::Native, Some("Text"), &[], native::text),
    entry(ComponentKind::Link, Platform::Native, None, &[], native::not_implemented),
    entry(ComponentKind::Image, Platform::Native, Some("Image"), &[], native::image),
    entry(ComponentKind::Input, Platform::Native, Some("TextInput"), &[], native::input),
];

const fn entry(
    kind: ComponentKind,
    platform: Platform,
    element: Option<&'static str>,
    imports: &'static [&'static str],
    generate: GenerateFn,
) -> GeneratorEntry {
    GeneratorEntry {
        kind,
        platform,
        element,
        imports,
        generate,
    }
}

/// All generator entries.
pub fn entries() -> &'static [GeneratorEntry] {
    GENERATORS
}

/// Find the generator for a kind and platform.
pub fn lookup(kind: ComponentKind, platform: Platform) -> Option<&'static GeneratorEntry> {
    GENERATORS
        .iter()
        .find(|e| e.kind == kind && e.platform == platform)
}

/// Generate markup for one entity from its children's markup.
pub fn generate(entity: &Entity, children: &[String], platform: Platform) -> String {
    match lookup(entity.kind, platform) {
        Some(entry) => (entry.generate)(entity, children),
        None => NOT_IMPLEMENTED.to_string(),
    }
}

/// The style payload of an entity as recorded in metadata: the class
/// string on web, the style object literal on native.
pub fn style_snapshot(entity: &Entity, platform: Platform) -> String {
    match platform {
        Platform::Web => entity.classes.join(" "),
        Platform::Native => {
            let style = NativeStyle::from_classes(&entity.classes);
            if style.is_empty() {
                String::new()
            } else {
                style.to_string()
            }
        }
    }
}

/// Indent every line of every block by one level.
pub(crate) fn indent_block<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .flat_map(|block| block.as_ref().lines())
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Open tag, indented body, close tag.
pub(crate) fn wrap_block<S: AsRef<str>>(tag: &str, attrs: &AttributeSet, body: &[S]) -> String {
    format!("<{}{}>\n{}\n</{}>", tag, attrs, indent_block(body), tag)
}

/// Handler placeholder for an event property.
///
/// `"submit"` becomes `handleSubmit`, `true` becomes `handle{default_event}`.
pub(crate) fn event_handler(entity: &Entity, property: &str, default_event: &str) -> Option<String> {
    match entity.property(property)? {
        PropertyValue::String(name) if !name.trim().is_empty() => {
            let name = name.trim();
            if name.starts_with("handle") {
                Some(name.to_case(Case::Camel))
            } else {
                Some(format!("handle{}", name.to_case(Case::Pascal)))
            }
        }
        PropertyValue::Boolean(true) => Some(format!("handle{}", default_event)),
        _ => None,
    }
}

/// Inner text of a leaf, defaulting to the capitalized kind name.
pub(crate) fn label(entity: &Entity) -> String {
    entity
        .text_content()
        .unwrap_or_else(|| entity.kind.display_name())
}
