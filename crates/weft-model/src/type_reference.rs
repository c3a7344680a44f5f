//! Canonical textual type references.

use std::sync::Arc;
use weft_common::{Atom, Interner};

/// A canonical, erasure-stable textual reference to a type.
///
/// This is a name, not a live handle: it is produced during an analysis
/// pass, never mutated, and carries no symbol identity. Wildcard bounds
/// have already been erased by the time a reference exists; every other
/// expression round-trips as written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeReference(Atom);

impl TypeReference {
    pub const fn new(atom: Atom) -> Self {
        Self(atom)
    }

    pub const fn as_atom(self) -> Atom {
        self.0
    }

    /// The full reference text.
    pub fn display(self, interner: &Interner) -> Arc<str> {
        interner.resolve_atom(self.0)
    }

    /// The unqualified name of the referenced type: the raw portion of
    /// the text with any leading package path stripped
    /// (`java.util.List<demo.A>` -> `List`).
    pub fn simple_name(self, interner: &Interner) -> String {
        let text = interner.resolve_atom(self.0);
        let raw = text.split('<').next().unwrap_or(&text);
        raw.rsplit('.').next().unwrap_or(raw).to_string()
    }
}
