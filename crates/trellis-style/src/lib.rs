//! Utility-class handling for Trellis.
//!
//! - [`vocabulary`] lists the class tokens each component kind accepts.
//! - [`arbitrary`] parses bracketed `prefix-[value]` tokens into style
//!   properties.
//! - [`native`] converts class tokens into React Native style objects.

pub mod arbitrary;
pub mod native;
pub mod vocabulary;

pub use arbitrary::{
    extract_arbitrary_styles, filter_non_arbitrary_classes, is_arbitrary, partition_classes,
    ArbitraryStyles,
};
pub use native::{NativeStyle, StyleValue};
pub use vocabulary::StyleCategory;
