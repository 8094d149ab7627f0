//! Code generation from Trellis component trees.
//!
//! Entity trees built in the visual editor are turned into JSX for two
//! targets:
//!
//! - [`Platform::Web`] - React DOM markup with `className` utility classes
//! - [`Platform::Native`] - React Native markup with converted `style`
//!   objects
//!
//! Trees are generated bottom-up by [`TreeGenerator`], optionally caching
//! each entity's output in a [`MetadataStore`] snapshot. [`Exporter`] wraps
//! the result into a complete component file.
//!
//! # Example
//!
//! ```
//! use trellis_codegen::{Platform, TreeGenerator};
//! use trellis_core::{ComponentKind, Entity};
//!
//! let button = Entity::new("save", ComponentKind::Button)
//!     .with_property("type", "submit")
//!     .with_property("disabled", true);
//!
//! let markup = TreeGenerator::for_platform(Platform::Web).generate(&button);
//! assert_eq!(markup, r#"<button type="submit" disabled>Button</button>"#);
//! ```

pub mod attributes;
pub mod error;
pub mod export;
pub mod generators;
pub mod metadata;
pub mod options;
pub mod tree;

pub use attributes::{AttributeSet, AttributeValue};
pub use error::{CodegenError, Result};
pub use export::{Exporter, GeneratedFile};
pub use generators::{GeneratorEntry, NOT_IMPLEMENTED};
pub use metadata::{MetadataRecord, MetadataStore};
pub use options::GeneratorOptions;
pub use tree::TreeGenerator;
pub use trellis_core::Platform;
