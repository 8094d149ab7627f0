//! Permitted utility-class tokens per component kind.
//!
//! The builder only offers a closed set of style tokens for each kind of
//! component. Tokens are grouped into attribute categories; each component
//! kind allows a fixed list of categories. A token outside those sets is
//! still accepted when it uses bracket syntax (`w-[120px]`).

use regex::Regex;
use std::sync::OnceLock;
use trellis_core::ComponentKind;

static VOCABULARY_ARBITRARY: OnceLock<Regex> = OnceLock::new();

/// Attribute category a style token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Width,
    Height,
    Padding,
    Margin,
    Border,
    Radius,
    Shadow,
    Background,
    Typography,
    TextColor,
    Layout,
    Alignment,
    Gap,
    ObjectFit,
}

impl StyleCategory {
    /// Every category.
    pub const ALL: [StyleCategory; 14] = [
        Self::Width,
        Self::Height,
        Self::Padding,
        Self::Margin,
        Self::Border,
        Self::Radius,
        Self::Shadow,
        Self::Background,
        Self::Typography,
        Self::TextColor,
        Self::Layout,
        Self::Alignment,
        Self::Gap,
        Self::ObjectFit,
    ];

    /// Tokens in this category.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Width => &[
                "w-auto", "w-full", "w-screen", "w-fit", "w-1/2", "w-1/3", "w-2/3", "w-1/4",
                "w-3/4", "w-8", "w-10", "w-12", "w-16", "w-20", "w-24", "w-32", "w-48", "w-64",
            ],
            Self::Height => &[
                "h-auto", "h-full", "h-screen", "h-fit", "h-8", "h-10", "h-12", "h-16", "h-20",
                "h-24", "h-32", "h-48", "h-64",
            ],
            Self::Padding => &[
                "p-0", "p-1", "p-2", "p-3", "p-4", "p-5", "p-6", "p-8", "px-2", "px-3", "px-4",
                "px-6", "py-1", "py-2", "py-3", "py-4",
            ],
            Self::Margin => &[
                "m-0", "m-1", "m-2", "m-4", "m-auto", "mx-auto", "mx-2", "mx-4", "my-2", "my-4",
                "mt-2", "mt-4", "mb-2", "mb-4",
            ],
            Self::Border => &[
                "border", "border-0", "border-2", "border-4", "border-gray-200",
                "border-gray-300", "border-blue-500",
            ],
            Self::Radius => &[
                "rounded-none", "rounded-sm", "rounded", "rounded-md", "rounded-lg",
                "rounded-xl", "rounded-full",
            ],
            Self::Shadow => &[
                "shadow-none", "shadow-sm", "shadow", "shadow-md", "shadow-lg", "shadow-xl",
            ],
            Self::Background => &[
                "bg-white", "bg-black", "bg-transparent", "bg-gray-100", "bg-gray-200",
                "bg-blue-500", "bg-blue-600", "bg-red-500", "bg-green-500",
            ],
            Self::Typography => &[
                "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
                "font-normal", "font-medium", "font-semibold", "font-bold", "text-left",
                "text-center", "text-right", "italic", "underline",
            ],
            Self::TextColor => &[
                "text-white", "text-black", "text-gray-500", "text-gray-700", "text-gray-900",
                "text-blue-600", "text-red-600",
            ],
            Self::Layout => &[
                "flex", "flex-row", "flex-col", "flex-wrap", "flex-1", "grid", "block",
                "inline-block", "hidden",
            ],
            Self::Alignment => &[
                "items-start", "items-center", "items-end", "items-stretch", "justify-start",
                "justify-center", "justify-end", "justify-between", "justify-around",
            ],
            Self::Gap => &["gap-0", "gap-1", "gap-2", "gap-3", "gap-4", "gap-6", "gap-8"],
            Self::ObjectFit => &["object-cover", "object-contain", "object-fill"],
        }
    }

    /// Whether the token is in this category.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().contains(&token)
    }
}

/// Categories a component kind accepts.
pub fn categories_for(kind: ComponentKind) -> &'static [StyleCategory] {
    use StyleCategory::*;

    match kind {
        ComponentKind::Page => &[Width, Height, Padding, Background, Layout, Alignment, Gap],
        ComponentKind::Container | ComponentKind::Card => &[
            Width, Height, Padding, Margin, Border, Radius, Shadow, Background, Layout,
            Alignment, Gap,
        ],
        ComponentKind::List => &[Width, Padding, Margin, Gap, Layout, Typography, TextColor],
        ComponentKind::Button => &[
            Width, Height, Padding, Margin, Border, Radius, Shadow, Background, Typography,
            TextColor,
        ],
        ComponentKind::Text | ComponentKind::Link => &[Margin, Padding, Typography, TextColor],
        ComponentKind::Image => &[Width, Height, Border, Radius, Shadow, Margin, ObjectFit],
        ComponentKind::Input => &[
            Width, Height, Padding, Margin, Border, Radius, Background, Typography, TextColor,
        ],
    }
}

/// Category of a static token, if it belongs to any.
pub fn category_of(token: &str) -> Option<StyleCategory> {
    StyleCategory::ALL
        .into_iter()
        .find(|category| category.contains(token))
}

/// All static tokens a component kind accepts.
pub fn permitted_tokens(kind: ComponentKind) -> impl Iterator<Item = &'static str> {
    categories_for(kind)
        .iter()
        .flat_map(|category| category.tokens().iter().copied())
}

/// Whether a token matches the vocabulary's bracket grammar.
pub fn is_arbitrary_token(token: &str) -> bool {
    VOCABULARY_ARBITRARY
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z-]+-\[[^\]]+\]$").expect("vocabulary pattern is valid")
        })
        .is_match(token)
}

/// Whether a component kind accepts a token.
pub fn is_permitted(kind: ComponentKind, token: &str) -> bool {
    is_arbitrary_token(token)
        || categories_for(kind)
            .iter()
            .any(|category| category.contains(token))
}

/// Tokens of a class list the kind does not accept, in order.
pub fn unknown_tokens<S: AsRef<str>>(kind: ComponentKind, tokens: &[S]) -> Vec<&str> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|token| !is_permitted(kind, token))
        .collect()
}
