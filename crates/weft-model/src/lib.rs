//! Static program model for the weft introspection core.
//!
//! This crate holds the immutable picture of the analyzed source that the
//! resolvers walk:
//!
//! - **Type expressions** (`TypeExpr`): types as written in source,
//!   including wildcards and type variables
//! - **Elements** (`ElementId`, `ElementInfo`, `ElementStore`): classes,
//!   interfaces, methods, constructors, and fields as stable symbol
//!   handles
//! - **Annotations** (`Annotation`): use-site annotations with their
//!   stereotypes
//! - **Arguments** (`Argument`): the typed-slot metadata the injection
//!   container consumes
//!
//! Everything here is produced once by the front end of an analysis pass
//! and read-only afterwards; lookups that can miss return `Option` and
//! never fail.

pub mod annotation;
pub mod argument;
pub mod element;
pub mod store;
pub mod type_expr;
pub mod type_reference;

pub use annotation::{Annotation, find_annotation_with_stereotype};
pub use argument::Argument;
pub use element::{ElementId, ElementInfo, ElementKind, Modifiers, ParamDecl, TypeParamDecl};
pub use store::ElementStore;
pub use type_expr::{OBJECT_CLASS, PrimitiveKind, TypeExpr};
pub use type_reference::TypeReference;
