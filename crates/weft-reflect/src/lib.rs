//! Reflection-metadata expansion for closed-world builds.
//!
//! In an ahead-of-time deployment nothing can be accessed reflectively
//! unless it was registered before the build closed the world. This
//! crate translates declarative directives ("keep all public methods of
//! this type", "keep this exact constructor") into the concrete set of
//! element registrations the build tool must preserve:
//!
//! - `ReflectionDirective` is the declarative input, deserialized from
//!   the annotation-metadata collaborator
//! - `ReflectionAccessExpander` resolves each directive against the
//!   element store and emits registrations into a
//!   `ReflectionConfigurationContext`
//! - `ReflectionManifest` is the in-tree accumulator context
//! - `reflect_config_json` collapses an accumulated manifest into the
//!   build tool's reflect-config JSON shape
//!
//! The whole surface is best-effort by design: the class universe of an
//! ahead-of-time build may be intentionally partial, so unresolvable
//! types and members are skipped silently and expansion never raises an
//! error.

pub mod context;
pub mod directive;
pub mod expander;
pub mod graal;

pub use context::{ReflectionConfigurationContext, ReflectionEntry, ReflectionManifest};
pub use directive::{
    AccessFlags, AccessType, CONSTRUCTOR_NAME, FieldDirective, MethodDirective,
    REFLECT_CONFIG_CLASS_SUFFIX, ReflectionDirective,
};
pub use expander::ReflectionAccessExpander;
pub use graal::{reflect_config_json, to_reflect_config_string};
