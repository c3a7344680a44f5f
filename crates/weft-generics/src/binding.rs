//! Resolved generic bindings.

use indexmap::IndexMap;
use weft_common::Atom;
use weft_model::TypeReference;

/// Ordered mapping from a type's formal generic-parameter names to the
/// references bound to them.
///
/// A binding is all-or-nothing: when the number of supplied type
/// arguments does not match the number of declared parameters (or the
/// type declares none), the binding is empty. Consumers treat an empty
/// binding as "raw/untyped", which is always a safe reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenericBinding {
    entries: IndexMap<Atom, TypeReference>,
}

impl GenericBinding {
    /// Create an empty binding.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Bind a parameter name to a reference.
    pub fn insert(&mut self, name: Atom, reference: TypeReference) {
        self.entries.insert(name, reference);
    }

    /// The reference bound to a parameter name.
    pub fn get(&self, name: Atom) -> Option<TypeReference> {
        self.entries.get(&name).copied()
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(parameter name, reference)` pairs in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, TypeReference)> + '_ {
        self.entries.iter().map(|(name, reference)| (*name, *reference))
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = Atom> + '_ {
        self.entries.keys().copied()
    }

    /// The first binding, if any.
    pub fn first(&self) -> Option<(Atom, TypeReference)> {
        self.iter().next()
    }
}
