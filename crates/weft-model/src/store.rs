//! Element storage and member lookup.
//!
//! `ElementStore` is the thread-safe registry behind `ElementId`: the
//! whole static program model of one analysis pass lives here. Besides
//! plain id -> record access it maintains a qualified-name index for
//! types and answers the member-enumeration and signature-lookup queries
//! that reflection expansion is built on.
//!
//! Every query is total: a name that does not resolve, a missing record,
//! or a malformed inheritance chain degrades to an empty result, never
//! an error.

use crate::element::{ElementId, ElementInfo, ElementKind};
use dashmap::DashMap;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;
use weft_common::limits::MAX_SUPERTYPE_CHAIN;
use weft_common::{Atom, Interner};

/// Thread-safe storage for program elements.
///
/// Uses `DashMap` so a parallelized analysis pass can register and query
/// elements from multiple threads.
pub struct ElementStore {
    /// `ElementId` -> `ElementInfo` mapping
    elements: DashMap<ElementId, ElementInfo>,

    /// Qualified name -> `ElementId`, maintained for class/interface
    /// registrations
    types_by_name: DashMap<Atom, ElementId>,

    /// Next available `ElementId`
    next_id: AtomicU32,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    /// Create a new element store.
    pub fn new() -> Self {
        Self {
            elements: DashMap::new(),
            types_by_name: DashMap::new(),
            next_id: AtomicU32::new(ElementId::FIRST_VALID),
        }
    }

    /// Allocate a fresh `ElementId`.
    fn allocate(&self) -> ElementId {
        ElementId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new element and return its `ElementId`.
    ///
    /// Class and interface elements are also entered into the
    /// qualified-name index.
    pub fn register(&self, info: ElementInfo) -> ElementId {
        let id = self.allocate();
        trace!(element_id = id.0, kind = ?info.kind, "ElementStore::register");
        if info.kind.is_type() {
            self.types_by_name.insert(info.qualified_name, id);
        }
        self.elements.insert(id, info);
        id
    }

    /// Register a member of an already-registered type: sets the
    /// enclosing link and appends to the owner's member list.
    pub fn register_member(&self, owner: ElementId, info: ElementInfo) -> ElementId {
        let id = self.register(info.with_enclosing(owner));
        if let Some(mut entry) = self.elements.get_mut(&owner) {
            entry.members.push(id);
        }
        id
    }

    /// Get element info by `ElementId`.
    pub fn get(&self, id: ElementId) -> Option<ElementInfo> {
        self.elements.get(&id).map(|r| r.clone())
    }

    /// Check if an `ElementId` exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Get the kind of an element.
    pub fn get_kind(&self, id: ElementId) -> Option<ElementKind> {
        self.elements.get(&id).map(|r| r.kind)
    }

    /// Get the simple name of an element.
    pub fn get_name(&self, id: ElementId) -> Option<Atom> {
        self.elements.get(&id).map(|r| r.name)
    }

    /// Get the qualified name of an element.
    pub fn get_qualified_name(&self, id: ElementId) -> Option<Atom> {
        self.elements.get(&id).map(|r| r.qualified_name)
    }

    /// Get the lexically enclosing element.
    pub fn get_enclosing(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id).and_then(|r| r.enclosing)
    }

    /// Look up a type by its interned qualified name.
    pub fn type_by_name(&self, name: Atom) -> Option<ElementId> {
        self.types_by_name.get(&name).map(|r| *r)
    }

    /// Look up a type by qualified name text.
    pub fn find_type(&self, interner: &Interner, name: &str) -> Option<ElementId> {
        self.type_by_name(interner.intern_string(name))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Clear all elements (for testing).
    pub fn clear(&self) {
        self.elements.clear();
        self.types_by_name.clear();
        self.next_id.store(ElementId::FIRST_VALID, Ordering::SeqCst);
    }

    /// Get all `ElementIds` (for debugging/testing).
    pub fn all_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|r| *r.key()).collect()
    }

    // =========================================================================
    // Member enumeration
    // =========================================================================

    fn members_of_kind(&self, id: ElementId, kind: ElementKind) -> Vec<ElementId> {
        let Some(info) = self.get(id) else {
            return Vec::new();
        };
        info.members
            .into_iter()
            .filter(|&m| self.get_kind(m) == Some(kind))
            .collect()
    }

    /// Methods declared directly on the type, any visibility, in
    /// declaration order.
    pub fn declared_methods(&self, id: ElementId) -> Vec<ElementId> {
        self.members_of_kind(id, ElementKind::Method)
    }

    /// Fields declared directly on the type, any visibility.
    pub fn declared_fields(&self, id: ElementId) -> Vec<ElementId> {
        self.members_of_kind(id, ElementKind::Field)
    }

    /// Constructors declared directly on the type, any visibility.
    pub fn declared_constructors(&self, id: ElementId) -> Vec<ElementId> {
        self.members_of_kind(id, ElementKind::Constructor)
    }

    /// Public methods of the type, including inherited ones.
    ///
    /// Declarations on a subtype shadow base declarations with the same
    /// name and erased parameter signature.
    pub fn public_methods(&self, id: ElementId, interner: &Interner) -> Vec<ElementId> {
        let chain = self.supertype_chain(id, interner);
        let mut merged: IndexMap<(Atom, Vec<Atom>), ElementId> = IndexMap::new();
        for &level in chain.iter().rev() {
            for member in self.declared_methods(level) {
                let Some(info) = self.get(member) else {
                    continue;
                };
                if !info.modifiers.is_public() {
                    continue;
                }
                let signature = Self::param_erasures_of(&info, interner);
                merged.insert((info.name, signature), member);
            }
        }
        merged.into_values().collect()
    }

    /// Public fields of the type, including inherited ones. Declarations
    /// on a subtype hide base declarations with the same name.
    pub fn public_fields(&self, id: ElementId, interner: &Interner) -> Vec<ElementId> {
        let chain = self.supertype_chain(id, interner);
        let mut merged: IndexMap<Atom, ElementId> = IndexMap::new();
        for &level in chain.iter().rev() {
            for member in self.declared_fields(level) {
                let Some(info) = self.get(member) else {
                    continue;
                };
                if !info.modifiers.is_public() {
                    continue;
                }
                merged.insert(info.name, member);
            }
        }
        merged.into_values().collect()
    }

    /// Public constructors of the type. Constructors are never
    /// inherited, so this is the declared list filtered to public.
    pub fn public_constructors(&self, id: ElementId) -> Vec<ElementId> {
        self.declared_constructors(id)
            .into_iter()
            .filter(|&c| {
                self.elements
                    .get(&c)
                    .is_some_and(|info| info.modifiers.is_public())
            })
            .collect()
    }

    /// Find a field by name: declared fields first, then the superclass
    /// chain, any visibility.
    pub fn find_field(&self, id: ElementId, name: Atom, interner: &Interner) -> Option<ElementId> {
        for level in self.supertype_chain(id, interner) {
            for member in self.declared_fields(level) {
                if self.get_name(member) == Some(name) {
                    return Some(member);
                }
            }
        }
        None
    }

    /// Find a declared method by name and exact ordered erased parameter
    /// signature.
    pub fn find_declared_method(
        &self,
        id: ElementId,
        name: Atom,
        param_erasures: &[Atom],
        interner: &Interner,
    ) -> Option<ElementId> {
        self.declared_methods(id).into_iter().find(|&m| {
            self.get(m).is_some_and(|info| {
                info.name == name && Self::param_erasures_of(&info, interner) == param_erasures
            })
        })
    }

    /// Find a declared constructor by exact ordered erased parameter
    /// signature.
    pub fn find_declared_constructor(
        &self,
        id: ElementId,
        param_erasures: &[Atom],
        interner: &Interner,
    ) -> Option<ElementId> {
        self.declared_constructors(id).into_iter().find(|&c| {
            self.get(c)
                .is_some_and(|info| Self::param_erasures_of(&info, interner) == param_erasures)
        })
    }

    /// The type and its superclasses, most derived first.
    ///
    /// The walk ends at a superclass name that does not resolve, at a
    /// cycle in malformed input, or at the chain-length ceiling.
    fn supertype_chain(&self, id: ElementId, interner: &Interner) -> Vec<ElementId> {
        let mut chain = vec![id];
        let mut current = id;
        let mut hops = 0;
        while hops < MAX_SUPERTYPE_CHAIN {
            let Some(info) = self.get(current) else {
                break;
            };
            let Some(superclass) = info.superclass else {
                break;
            };
            let Some(next) = self.type_by_name(superclass.erasure_atom(interner)) else {
                break;
            };
            if chain.contains(&next) {
                break;
            }
            chain.push(next);
            current = next;
            hops += 1;
        }
        chain
    }

    /// Erased parameter signature of a method or constructor.
    fn param_erasures_of(info: &ElementInfo, interner: &Interner) -> Vec<Atom> {
        info.params
            .iter()
            .map(|p| p.ty.erasure_atom(interner))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod tests;
