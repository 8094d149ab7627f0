//! Ordered JSX attribute lists.

use std::fmt;
use trellis_core::PropertyValue;

/// How an attribute value is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Bare boolean attribute: `disabled`.
    Flag,
    /// Quoted string: `type="submit"`.
    Literal(String),
    /// JSX expression: `onClick={handleClick}`.
    Expression(String),
}

/// Attributes of one element, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quoted string attribute.
    pub fn push_literal(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .push((name.to_string(), AttributeValue::Literal(value.into())));
    }

    /// Append a JSX expression attribute.
    pub fn push_expression(&mut self, name: &str, expression: impl Into<String>) {
        self.entries
            .push((name.to_string(), AttributeValue::Expression(expression.into())));
    }

    /// Append a bare boolean attribute.
    pub fn push_flag(&mut self, name: &str) {
        self.entries.push((name.to_string(), AttributeValue::Flag));
    }

    /// Append an attribute from a property value.
    ///
    /// Strings are quoted, numbers become expressions, `true` is a bare
    /// flag and `false` is omitted.
    pub fn push_property(&mut self, name: &str, value: &PropertyValue) {
        match value {
            PropertyValue::String(s) => self.push_literal(name, s.as_str()),
            PropertyValue::Number(n) => self.push_expression(name, n.to_string()),
            PropertyValue::Boolean(true) => self.push_flag(name),
            PropertyValue::Boolean(false) => {}
        }
    }

    /// Get an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Each attribute is written with a leading space so the set can follow a
/// tag name directly: `<button{attrs}>`.
impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            match value {
                AttributeValue::Flag => write!(f, " {}", name)?,
                AttributeValue::Literal(s) => write!(f, " {}=\"{}\"", name, s)?,
                AttributeValue::Expression(e) => write!(f, " {}={{{}}}", name, e)?,
            }
        }
        Ok(())
    }
}
