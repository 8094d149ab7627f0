//! The closed component catalog and the target platforms.

use crate::error::CoreError;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a component in the builder catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    // Containers
    #[serde(alias = "Page")]
    Page,
    #[serde(alias = "Container")]
    Container,
    #[serde(alias = "Card")]
    Card,
    #[serde(alias = "List")]
    List,

    // Leaves
    #[serde(alias = "Button")]
    Button,
    #[serde(alias = "Text")]
    Text,
    #[serde(alias = "Link")]
    Link,
    #[serde(alias = "Image")]
    Image,
    #[serde(alias = "Input")]
    Input,
}

impl ComponentKind {
    /// Every kind in the catalog.
    pub const ALL: [ComponentKind; 9] = [
        Self::Page,
        Self::Container,
        Self::Card,
        Self::List,
        Self::Button,
        Self::Text,
        Self::Link,
        Self::Image,
        Self::Input,
    ];

    /// Lowercase catalog name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Container => "container",
            Self::Card => "card",
            Self::List => "list",
            Self::Button => "button",
            Self::Text => "text",
            Self::Link => "link",
            Self::Image => "image",
            Self::Input => "input",
        }
    }

    /// Capitalized name, used as default inner text.
    pub fn display_name(&self) -> String {
        self.as_str().to_case(Case::Pascal)
    }

    /// Whether entities of this kind own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Page | Self::Container | Self::Card | Self::List)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

/// Output target for generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// React DOM markup.
    #[default]
    #[serde(alias = "react")]
    Web,
    /// React Native markup.
    #[serde(alias = "react-native")]
    Native,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Platform; 2] = [Self::Web, Self::Native];

    /// Lowercase platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "react" => Ok(Self::Web),
            "native" | "react-native" => Ok(Self::Native),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_name() {
        assert_eq!(ComponentKind::Button.display_name(), "Button");
        assert_eq!(ComponentKind::Container.display_name(), "Container");
    }

    #[test]
    fn test_kind_from_str_is_case_insensitive() {
        assert_eq!("Image".parse::<ComponentKind>().unwrap(), ComponentKind::Image);
        assert_eq!(" list ".parse::<ComponentKind>().unwrap(), ComponentKind::List);
        assert!(matches!(
            "carousel".parse::<ComponentKind>(),
            Err(CoreError::UnknownKind(name)) if name == "carousel"
        ));
    }

    #[test]
    fn test_containers() {
        let containers: Vec<_> = ComponentKind::ALL
            .into_iter()
            .filter(ComponentKind::is_container)
            .collect();
        assert_eq!(
            containers,
            vec![
                ComponentKind::Page,
                ComponentKind::Container,
                ComponentKind::Card,
                ComponentKind::List
            ]
        );
    }

    #[test]
    fn test_platform_aliases() {
        assert_eq!("react-native".parse::<Platform>().unwrap(), Platform::Native);
        assert_eq!("web".parse::<Platform>().unwrap(), Platform::Web);
        assert!("flutter".parse::<Platform>().is_err());

        let native: Platform = serde_json::from_str("\"react-native\"").unwrap();
        assert_eq!(native, Platform::Native);
    }

    #[test]
    fn test_kind_serde_accepts_pascal_case() {
        let kind: ComponentKind = serde_json::from_str("\"Button\"").unwrap();
        assert_eq!(kind, ComponentKind::Button);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"button\"");
    }
}
