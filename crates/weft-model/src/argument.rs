//! Typed-slot metadata for injection.
//!
//! An `Argument` describes one named, typed slot: a constructor or
//! method parameter, a field, or a return value. The injection container
//! consumes these to decide what to provide where; nested generic
//! structure is carried as a recursive name-keyed map of further
//! arguments.

use crate::annotation::{Annotation, find_annotation_with_stereotype};
use crate::type_reference::TypeReference;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use weft_common::{Atom, Interner};

/// The one empty type-variable map, shared by every argument without
/// generic structure.
static EMPTY_TYPE_VARIABLES: Lazy<Arc<IndexMap<Atom, Argument>>> =
    Lazy::new(|| Arc::new(IndexMap::new()));

/// An argument to a constructor or method, or a field slot.
///
/// Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Argument {
    ty: TypeReference,
    name: Atom,
    qualifier: Option<Annotation>,
    annotations: Vec<Annotation>,
    type_variables: Arc<IndexMap<Atom, Argument>>,
}

impl Argument {
    /// Create an argument with its full annotation set.
    ///
    /// `generics` are the arguments describing this slot's own generic
    /// type variables; they are keyed by name, in the given order.
    pub fn new(
        ty: TypeReference,
        name: Atom,
        qualifier: Option<Annotation>,
        annotations: Vec<Annotation>,
        generics: Vec<Argument>,
    ) -> Self {
        Self {
            ty,
            name,
            qualifier,
            annotations,
            type_variables: Self::initialize_type_variables(generics),
        }
    }

    /// Create an argument without annotations.
    pub fn of(
        ty: TypeReference,
        name: Atom,
        qualifier: Option<Annotation>,
        generics: Vec<Argument>,
    ) -> Self {
        Self::new(ty, name, qualifier, Vec::new(), generics)
    }

    fn initialize_type_variables(generics: Vec<Argument>) -> Arc<IndexMap<Atom, Argument>> {
        if generics.is_empty() {
            Arc::clone(&EMPTY_TYPE_VARIABLES)
        } else {
            Arc::new(generics.into_iter().map(|g| (g.name, g)).collect())
        }
    }

    /// The resolved type reference of this slot.
    pub fn ty(&self) -> TypeReference {
        self.ty
    }

    /// The slot name.
    pub fn name(&self) -> Atom {
        self.name
    }

    /// The qualifier annotation used to disambiguate injection, if any.
    pub fn qualifier(&self) -> Option<&Annotation> {
        self.qualifier.as_ref()
    }

    /// All annotations present on the slot, in source order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// This slot's generic type variables, keyed by parameter name, in
    /// declaration order.
    pub fn type_variables(&self) -> &IndexMap<Atom, Argument> {
        &self.type_variables
    }

    /// The first generic type variable, if any.
    pub fn first_type_variable(&self) -> Option<&Argument> {
        self.type_variables.values().next()
    }

    /// Find an annotation by exact annotation type.
    pub fn annotation(&self, name: Atom) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name() == name)
    }

    /// Find an annotation by stereotype.
    pub fn find_annotation(&self, stereotype: Atom) -> Option<&Annotation> {
        find_annotation_with_stereotype(stereotype, &self.annotations)
    }

    /// `"{simple type name} {name}"`, for diagnostics.
    pub fn display(&self, interner: &Interner) -> String {
        format!(
            "{} {}",
            self.ty.simple_name(interner),
            interner.resolve_atom(self.name)
        )
    }
}

/// Argument identity covers `(type, name, qualifier)` and nothing else.
///
/// Two arguments with the same type, name, and qualifier are equal even
/// when their annotation sets or nested generics differ. The container
/// keys injection slots this way; callers that need full structural
/// comparison must compare fields themselves.
impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.name == other.name && self.qualifier == other.qualifier
    }
}

impl Eq for Argument {}

impl Hash for Argument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
        self.name.hash(state);
        self.qualifier.hash(state);
    }
}

#[cfg(test)]
#[path = "../tests/argument_tests.rs"]
mod tests;
