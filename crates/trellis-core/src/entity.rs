//! Entity tree nodes.
//!
//! Entities are produced by the visual editor. The code generation layer
//! only ever reads them.

use crate::error::{CoreError, Result};
use crate::kind::ComponentKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A node in the component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier, unique within a tree.
    pub id: String,
    /// Component kind.
    pub kind: ComponentKind,
    /// Property bag in editor order.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
    /// Utility-class tokens in editor order.
    #[serde(default, alias = "classNames")]
    pub classes: Vec<String>,
    /// Owned children, in order.
    #[serde(default)]
    pub children: Vec<Entity>,
}

impl Entity {
    /// Create an entity with no properties, classes or children.
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            properties: IndexMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Append one class token.
    pub fn with_class(mut self, token: impl Into<String>) -> Self {
        self.classes.push(token.into());
        self
    }

    /// Append every whitespace-separated token of a class string.
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Add a child entity.
    pub fn with_child(mut self, child: Entity) -> Self {
        self.children.push(child);
        self
    }

    /// Get a property value.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Property rendered as text. Booleans are not text.
    pub fn text_property(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            PropertyValue::String(s) => Some(s.clone()),
            PropertyValue::Number(n) => Some(n.to_string()),
            PropertyValue::Boolean(_) => None,
        }
    }

    /// Whether a boolean property is set to true.
    ///
    /// The editor sometimes stores flags as the string `"true"`.
    pub fn is_flag_set(&self, key: &str) -> bool {
        match self.properties.get(key) {
            Some(PropertyValue::Boolean(b)) => *b,
            Some(PropertyValue::String(s)) => s == "true",
            _ => false,
        }
    }

    /// Inner text: the `text` property, then `children`.
    pub fn text_content(&self) -> Option<String> {
        self.text_property("text")
            .or_else(|| self.text_property("children"))
    }

    /// Pre-order iterator over this entity and its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Check structural invariants of the tree rooted here.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entity in self.iter() {
            if !entity.kind.is_container() && !entity.children.is_empty() {
                return Err(CoreError::LeafWithChildren {
                    id: entity.id.clone(),
                    kind: entity.kind.to_string(),
                });
            }
            if !seen.insert(entity.id.as_str()) {
                return Err(CoreError::DuplicateId(entity.id.clone()));
            }
        }
        Ok(())
    }

    /// Load and validate a tree from editor JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let entity: Entity = serde_json::from_str(json)?;
        entity.validate()?;
        Ok(entity)
    }
}

/// Pre-order traversal over an entity tree.
pub struct Iter<'a> {
    stack: Vec<&'a Entity>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let entity = self.stack.pop()?;
        self.stack.extend(entity.children.iter().rev());
        Some(entity)
    }
}

/// A value in an entity's property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl PropertyValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as boolean if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Boolean(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Number(f64::from(v))
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let button = Entity::new("btn", ComponentKind::Button)
            .with_property("text", "Submit")
            .with_property("disabled", false)
            .with_classes("px-4  py-2 rounded");

        assert_eq!(button.kind, ComponentKind::Button);
        assert_eq!(button.classes, vec!["px-4", "py-2", "rounded"]);
        assert_eq!(button.text_content().as_deref(), Some("Submit"));
        assert!(!button.is_flag_set("disabled"));
    }

    #[test]
    fn test_text_content_falls_back_to_children_prop() {
        let text = Entity::new("t", ComponentKind::Text).with_property("children", "Hello");
        assert_eq!(text.text_content().as_deref(), Some("Hello"));

        let numeric = Entity::new("n", ComponentKind::Text).with_property("text", 42);
        assert_eq!(numeric.text_content().as_deref(), Some("42"));
    }

    #[test]
    fn test_string_flags() {
        let input = Entity::new("in", ComponentKind::Input).with_property("required", "true");
        assert!(input.is_flag_set("required"));
        assert!(!input.is_flag_set("disabled"));
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = Entity::new("root", ComponentKind::Page)
            .with_child(
                Entity::new("a", ComponentKind::Container)
                    .with_child(Entity::new("a1", ComponentKind::Text)),
            )
            .with_child(Entity::new("b", ComponentKind::Button));

        let ids: Vec<&str> = tree.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "id": "page",
            "kind": "Page",
            "classes": ["p-4"],
            "children": [
                { "id": "img", "kind": "image", "properties": { "src": "/hero.png", "width": 320 } }
            ]
        }"#;

        let page = Entity::from_json(json).unwrap();
        assert_eq!(page.children.len(), 1);
        let image = &page.children[0];
        assert_eq!(image.property("width"), Some(&PropertyValue::Number(320.0)));
        assert_eq!(image.text_property("src").as_deref(), Some("/hero.png"));
        assert!(image.classes.is_empty());
    }

    #[test]
    fn test_from_json_rejects_leaf_children() {
        let json = r#"{
            "id": "btn",
            "kind": "button",
            "children": [{ "id": "inner", "kind": "text" }]
        }"#;

        let err = Entity::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::LeafWithChildren { ref id, .. } if id == "btn"));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"{
            "id": "root",
            "kind": "container",
            "children": [
                { "id": "x", "kind": "text" },
                { "id": "x", "kind": "text" }
            ]
        }"#;

        assert!(matches!(
            Entity::from_json(json),
            Err(CoreError::DuplicateId(id)) if id == "x"
        ));
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let json = r#"{ "id": "c", "kind": "carousel" }"#;
        assert!(matches!(Entity::from_json(json), Err(CoreError::Json(_))));
    }
}
