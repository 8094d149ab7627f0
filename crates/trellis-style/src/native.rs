//! Utility classes to React Native style objects.
//!
//! Only a closed subset of tokens has a native equivalent. Tokens are
//! resolved in this order:
//!
//! 1. bracket tokens, through [`crate::arbitrary`]
//! 2. keyword tokens (`flex-row`, `rounded-lg`, `font-bold`, ...)
//! 3. colour tokens (`bg-*`, `text-*`, `border-*`) over the palette
//! 4. spacing and sizing tokens (`p-4`, `mx-2`, `w-full`, ...) over the
//!    spacing scale, where one step is 4 px
//!
//! Anything else is dropped.

use crate::arbitrary::{extract_arbitrary_styles, is_arbitrary, properties_for_prefix};
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A native style value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    String(Cow<'static, str>),
}

impl StyleValue {
    /// Parse a literal from a bracket token. `12px` and `12` become numbers.
    pub fn from_literal(raw: &str) -> Self {
        let numeric = raw.strip_suffix("px").unwrap_or(raw);
        match numeric.parse::<f64>() {
            Ok(n) if n.is_finite() => StyleValue::Number(n),
            _ => StyleValue::String(Cow::Owned(raw.to_string())),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

const fn num(n: f64) -> StyleValue {
    StyleValue::Number(n)
}

const fn text(s: &'static str) -> StyleValue {
    StyleValue::String(Cow::Borrowed(s))
}

type Declarations = &'static [(&'static str, StyleValue)];

static KEYWORD_STYLES: &[(&str, Declarations)] = &[
    // Layout
    ("flex", &[("display", text("flex"))]),
    ("hidden", &[("display", text("none"))]),
    ("flex-row", &[("flexDirection", text("row"))]),
    ("flex-col", &[("flexDirection", text("column"))]),
    ("flex-wrap", &[("flexWrap", text("wrap"))]),
    ("flex-1", &[("flex", num(1.0))]),
    ("absolute", &[("position", text("absolute"))]),
    ("relative", &[("position", text("relative"))]),
    ("overflow-hidden", &[("overflow", text("hidden"))]),
    // Alignment
    ("items-start", &[("alignItems", text("flex-start"))]),
    ("items-center", &[("alignItems", text("center"))]),
    ("items-end", &[("alignItems", text("flex-end"))]),
    ("items-stretch", &[("alignItems", text("stretch"))]),
    ("justify-start", &[("justifyContent", text("flex-start"))]),
    ("justify-center", &[("justifyContent", text("center"))]),
    ("justify-end", &[("justifyContent", text("flex-end"))]),
    ("justify-between", &[("justifyContent", text("space-between"))]),
    ("justify-around", &[("justifyContent", text("space-around"))]),
    ("justify-evenly", &[("justifyContent", text("space-evenly"))]),
    ("self-center", &[("alignSelf", text("center"))]),
    // Typography
    ("text-left", &[("textAlign", text("left"))]),
    ("text-center", &[("textAlign", text("center"))]),
    ("text-right", &[("textAlign", text("right"))]),
    ("text-xs", &[("fontSize", num(12.0))]),
    ("text-sm", &[("fontSize", num(14.0))]),
    ("text-base", &[("fontSize", num(16.0))]),
    ("text-lg", &[("fontSize", num(18.0))]),
    ("text-xl", &[("fontSize", num(20.0))]),
    ("text-2xl", &[("fontSize", num(24.0))]),
    ("text-3xl", &[("fontSize", num(30.0))]),
    ("font-normal", &[("fontWeight", text("400"))]),
    ("font-medium", &[("fontWeight", text("500"))]),
    ("font-semibold", &[("fontWeight", text("600"))]),
    ("font-bold", &[("fontWeight", text("700"))]),
    ("italic", &[("fontStyle", text("italic"))]),
    ("underline", &[("textDecorationLine", text("underline"))]),
    // Borders
    ("rounded-none", &[("borderRadius", num(0.0))]),
    ("rounded-sm", &[("borderRadius", num(2.0))]),
    ("rounded", &[("borderRadius", num(4.0))]),
    ("rounded-md", &[("borderRadius", num(6.0))]),
    ("rounded-lg", &[("borderRadius", num(8.0))]),
    ("rounded-xl", &[("borderRadius", num(12.0))]),
    ("rounded-2xl", &[("borderRadius", num(16.0))]),
    ("rounded-full", &[("borderRadius", num(9999.0))]),
    ("border", &[("borderWidth", num(1.0))]),
    ("border-0", &[("borderWidth", num(0.0))]),
    ("border-2", &[("borderWidth", num(2.0))]),
    ("border-4", &[("borderWidth", num(4.0))]),
    // Shadows map to Android elevation
    ("shadow-none", &[("elevation", num(0.0))]),
    ("shadow-sm", &[("elevation", num(1.0))]),
    ("shadow", &[("elevation", num(2.0))]),
    ("shadow-md", &[("elevation", num(4.0))]),
    ("shadow-lg", &[("elevation", num(8.0))]),
    ("shadow-xl", &[("elevation", num(12.0))]),
    // Images
    ("object-cover", &[("resizeMode", text("cover"))]),
    ("object-contain", &[("resizeMode", text("contain"))]),
    ("object-fill", &[("resizeMode", text("stretch"))]),
    // Opacity
    ("opacity-0", &[("opacity", num(0.0))]),
    ("opacity-50", &[("opacity", num(0.5))]),
    ("opacity-75", &[("opacity", num(0.75))]),
    ("opacity-100", &[("opacity", num(1.0))]),
];

static COLOR_PREFIXES: &[(&str, &str)] = &[
    ("bg", "backgroundColor"),
    ("text", "color"),
    ("border", "borderColor"),
];

static PALETTE: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("transparent", "transparent"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-500", "#6b7280"),
    ("gray-700", "#374151"),
    ("gray-900", "#111827"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("green-500", "#22c55e"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
];

static SPACING_SCALE: &[(&str, StyleValue)] = &[
    ("0", num(0.0)),
    ("px", num(1.0)),
    ("0.5", num(2.0)),
    ("1", num(4.0)),
    ("1.5", num(6.0)),
    ("2", num(8.0)),
    ("2.5", num(10.0)),
    ("3", num(12.0)),
    ("4", num(16.0)),
    ("5", num(20.0)),
    ("6", num(24.0)),
    ("8", num(32.0)),
    ("10", num(40.0)),
    ("12", num(48.0)),
    ("16", num(64.0)),
    ("20", num(80.0)),
    ("24", num(96.0)),
    ("32", num(128.0)),
    ("48", num(192.0)),
    ("64", num(256.0)),
    ("full", text("100%")),
    ("auto", text("auto")),
];

fn lookup<T>(table: &'static [(&'static str, T)], key: &str) -> Option<&'static T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// A React Native style object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NativeStyle {
    properties: IndexMap<String, StyleValue>,
}

impl NativeStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a space-separated class string.
    pub fn from_class_string(classes: &str) -> Self {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        Self::from_classes(&tokens)
    }

    /// Convert a list of class tokens. Later tokens override earlier ones.
    pub fn from_classes<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut style = Self::new();

        for token in tokens {
            let token = token.as_ref();
            if is_arbitrary(token) {
                for (property, value) in extract_arbitrary_styles(&[token]) {
                    style.insert(property, StyleValue::from_literal(&value));
                }
            } else if let Some(declarations) = resolve_static(token) {
                for (property, value) in declarations {
                    style.insert(property, value);
                }
            } else {
                log::trace!("no native style for class: {}", token);
            }
        }

        style
    }

    /// Set a property.
    pub fn insert(&mut self, property: impl Into<String>, value: StyleValue) {
        self.properties.insert(property.into(), value);
    }

    /// Get a property.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the style sets nothing.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Renders as a JS object literal: `{ padding: 16, color: "#ffffff" }`.
impl fmt::Display for NativeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.properties.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (property, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        write!(f, " }}")
    }
}

fn resolve_static(token: &str) -> Option<Vec<(&'static str, StyleValue)>> {
    if let Some(declarations) = lookup(KEYWORD_STYLES, token) {
        return Some(declarations.to_vec());
    }

    if let Some((prefix, color)) = token.split_once('-') {
        if let (Some(property), Some(hex)) = (lookup(COLOR_PREFIXES, prefix), lookup(PALETTE, color)) {
            return Some(vec![(*property, text(*hex))]);
        }
    }

    let (prefix, step) = token.rsplit_once('-')?;
    let properties = properties_for_prefix(prefix)?;
    let value = lookup(SPACING_SCALE, step)?;
    Some(
        properties
            .iter()
            .map(|property| (*property, value.clone()))
            .collect(),
    )
}
