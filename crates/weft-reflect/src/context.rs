//! Registration context and manifest accumulation.

use std::sync::{Mutex, PoisonError};
use tracing::trace;
use weft_common::Interner;
use weft_model::{ElementId, ElementStore};

/// One accumulated registration: a tagged element handle that must
/// remain reflectively accessible after the build closes the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReflectionEntry {
    Type(ElementId),
    Method(ElementId),
    Field(ElementId),
    Constructor(ElementId),
}

/// The capabilities directive expansion consumes.
///
/// The ahead-of-time build tool supplies the production implementation;
/// [`ReflectionManifest`] is the in-tree accumulator. Expansion only
/// ever writes registrations through this trait and resolves names
/// through it; it never reads the accumulated state back.
pub trait ReflectionConfigurationContext {
    /// Find a type by qualified name.
    fn find_type_by_name(&self, name: &str) -> Option<ElementId>;

    /// Keep the given type reflectively accessible.
    fn register_type(&self, ty: ElementId);

    /// Keep the given method reflectively accessible.
    fn register_method(&self, method: ElementId);

    /// Keep the given field reflectively accessible.
    fn register_field(&self, field: ElementId);

    /// Keep the given constructor reflectively accessible.
    fn register_constructor(&self, constructor: ElementId);
}

/// Append-only registration accumulator backed by the element store.
///
/// Interior-mutable so one shared manifest can take registrations from
/// a parallelized pass; entries keep arrival order and duplicates are
/// kept as-is (emission dedupes).
pub struct ReflectionManifest<'a> {
    store: &'a ElementStore,
    interner: &'a Interner,
    entries: Mutex<Vec<ReflectionEntry>>,
}

impl<'a> ReflectionManifest<'a> {
    pub fn new(store: &'a ElementStore, interner: &'a Interner) -> Self {
        Self {
            store,
            interner,
            entries: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, entry: ReflectionEntry) {
        trace!(?entry, "ReflectionManifest::register");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Snapshot of the accumulated entries, in arrival order.
    pub fn entries(&self) -> Vec<ReflectionEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of accumulated entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReflectionConfigurationContext for ReflectionManifest<'_> {
    fn find_type_by_name(&self, name: &str) -> Option<ElementId> {
        self.store.find_type(self.interner, name)
    }

    fn register_type(&self, ty: ElementId) {
        self.push(ReflectionEntry::Type(ty));
    }

    fn register_method(&self, method: ElementId) {
        self.push(ReflectionEntry::Method(method));
    }

    fn register_field(&self, field: ElementId) {
        self.push(ReflectionEntry::Field(field));
    }

    fn register_constructor(&self, constructor: ElementId) {
        self.push(ReflectionEntry::Constructor(constructor));
    }
}
