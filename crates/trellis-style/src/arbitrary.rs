//! Arbitrary-value class tokens (`w-[120px]`, `px-[1rem]`, ...).
//!
//! A token matching `prefix-[value]` carries a literal value instead of a
//! scale step. [`extract_arbitrary_styles`] turns such tokens into style
//! properties and [`filter_non_arbitrary_classes`] returns the rest, so
//! together they split a class list into two disjoint halves.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Style properties extracted from arbitrary tokens, in first-seen order.
pub type ArbitraryStyles = IndexMap<String, String>;

static ARBITRARY_CLASS: OnceLock<Regex> = OnceLock::new();

/// Prefix to style property table. Axis prefixes expand to two properties.
const PREFIX_PROPERTIES: &[(&str, &[&str])] = &[
    ("w", &["width"]),
    ("h", &["height"]),
    ("min-w", &["minWidth"]),
    ("max-w", &["maxWidth"]),
    ("min-h", &["minHeight"]),
    ("max-h", &["maxHeight"]),
    ("p", &["padding"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("m", &["margin"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("gap", &["gap"]),
    ("top", &["top"]),
    ("right", &["right"]),
    ("bottom", &["bottom"]),
    ("left", &["left"]),
];

fn arbitrary_class() -> &'static Regex {
    ARBITRARY_CLASS.get_or_init(|| {
        Regex::new(r"^([\w-]+)-\[([^\]]+)\]$").expect("arbitrary class pattern is valid")
    })
}

/// Style properties a spacing or sizing prefix sets.
pub fn properties_for_prefix(prefix: &str) -> Option<&'static [&'static str]> {
    PREFIX_PROPERTIES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, props)| *props)
}

/// Split an arbitrary token into `(prefix, value)`.
pub fn parse_arbitrary(token: &str) -> Option<(&str, &str)> {
    let captures = arbitrary_class().captures(token)?;
    let prefix = captures.get(1)?.as_str();
    let value = captures.get(2)?.as_str();
    Some((prefix, value))
}

/// Whether a token uses bracket syntax.
pub fn is_arbitrary(token: &str) -> bool {
    arbitrary_class().is_match(token)
}

/// Extract style properties from the arbitrary tokens of a class list.
///
/// Tokens without bracket syntax and tokens with an unknown prefix are
/// skipped. When two tokens set the same property the later one wins.
pub fn extract_arbitrary_styles<S: AsRef<str>>(tokens: &[S]) -> ArbitraryStyles {
    let mut styles = ArbitraryStyles::new();

    for token in tokens {
        let Some((prefix, value)) = parse_arbitrary(token.as_ref()) else {
            continue;
        };
        let Some(properties) = properties_for_prefix(prefix) else {
            log::trace!("dropping arbitrary class with unknown prefix: {}", token.as_ref());
            continue;
        };
        for property in properties {
            styles.insert((*property).to_string(), value.to_string());
        }
    }

    styles
}

/// Class tokens that are left for static style-sheet resolution.
pub fn filter_non_arbitrary_classes<S: AsRef<str>>(tokens: &[S]) -> Vec<&str> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|token| !is_arbitrary(token))
        .collect()
}

/// Split a class list into `(arbitrary, static)` tokens, preserving order.
pub fn partition_classes<S: AsRef<str>>(tokens: &[S]) -> (Vec<&str>, Vec<&str>) {
    tokens.iter().map(AsRef::<str>::as_ref).partition(|token| is_arbitrary(token))
}
