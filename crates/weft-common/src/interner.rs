//! String interning for the weft introspection core.
//!
//! Every name in the static program model (qualified type names, member
//! names, generic-parameter names, annotation names) is interned once and
//! referred to by a small `Atom` key afterwards. This makes name
//! comparison O(1) and keeps the model structures `Copy`-friendly.

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// An interned string key (32-bit index).
///
/// Atoms are small (4 bytes) and can be copied cheaply. Two atoms from
/// the same [`Interner`] are equal iff the strings they name are equal.
/// Use [`Interner::resolve_atom`] to get the actual string back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(u32);

impl Atom {
    /// The raw index backing this atom.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Thread-safe string interner.
///
/// Interning takes `&self`, so a single interner can be shared by
/// reference across an entire analysis pass (and across threads, if the
/// surrounding pass parallelizes) without locking discipline at call
/// sites.
pub struct Interner {
    /// string -> atom
    forward: DashMap<Arc<str>, Atom>,
    /// atom -> string
    reverse: DashMap<Atom, Arc<str>>,
    /// Next free atom index
    next: AtomicU32,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    /// Create a new empty interner.
    pub fn new() -> Self {
        Self {
            forward: DashMap::new(),
            reverse: DashMap::new(),
            next: AtomicU32::new(0),
        }
    }

    /// Intern a string, returning its atom.
    ///
    /// If the string was already interned, returns the existing atom.
    pub fn intern_string(&self, s: &str) -> Atom {
        if let Some(existing) = self.forward.get(s) {
            return *existing;
        }
        match self.forward.entry(Arc::from(s)) {
            dashmap::mapref::entry::Entry::Occupied(occupied) => *occupied.get(),
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                let atom = Atom(self.next.fetch_add(1, Ordering::SeqCst));
                self.reverse.insert(atom, Arc::clone(vacant.key()));
                vacant.insert(atom);
                atom
            }
        }
    }

    /// Resolve an atom back to its string.
    ///
    /// # Panics
    ///
    /// Panics if the atom was not created by this interner.
    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.reverse
            .get(&atom)
            .map(|entry| Arc::clone(&entry))
            .expect("atom was not created by this interner")
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Check if the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
