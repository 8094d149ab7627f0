//! Core types for the Trellis UI builder.
//!
//! This crate defines the component entity tree produced by the visual
//! editor: the closed catalog of component kinds, the target platforms code
//! can be generated for, and the entity nodes themselves.
//!
//! # Example
//!
//! ```
//! use trellis_core::{ComponentKind, Entity, PropertyValue};
//!
//! let page = Entity::new("page-1", ComponentKind::Page)
//!     .with_class("p-4")
//!     .with_child(
//!         Entity::new("btn-1", ComponentKind::Button)
//!             .with_property("text", PropertyValue::from("Save")),
//!     );
//!
//! assert_eq!(page.children.len(), 1);
//! ```

pub mod entity;
pub mod error;
pub mod kind;

pub use entity::{Entity, PropertyValue};
pub use error::{CoreError, Result};
pub use kind::{ComponentKind, Platform};
