//! Generic-type resolution for the weft introspection core.
//!
//! Given the element graph built by the front end, this crate answers
//! the questions the injection container needs answered statically:
//!
//! - What is the canonical reference for a type expression, with
//!   wildcard bounds erased? (`resolve_type_reference`)
//! - Which concrete types are bound to a declared type's generic
//!   parameters? (`GenericTypeResolver::resolve_generic_bindings`)
//! - Which type arguments were supplied to a directly implemented
//!   interface? (`GenericTypeResolver::interface_generic_types_for`)
//! - What is the declared bound of a type variable, found by walking the
//!   lexically enclosing declarations?
//!   (`GenericTypeResolver::resolve_type_variable_bound`)
//!
//! All of it runs during a single static-analysis pass over possibly
//! malformed source, so every operation is total: unknown names, arity
//! mismatches, and unbounded variables degrade to "no generic
//! information", never to an error.

mod argument_factory;
pub mod binding;
pub mod reference_resolver;
pub mod resolver;

pub use binding::GenericBinding;
pub use reference_resolver::resolve_type_reference;
pub use resolver::GenericTypeResolver;
