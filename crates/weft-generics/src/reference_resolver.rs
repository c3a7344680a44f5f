//! Total resolution of type expressions to canonical references.

use weft_common::Interner;
use weft_model::{OBJECT_CLASS, TypeExpr, TypeReference};

/// Resolve a type expression to its canonical reference. Never fails.
///
/// Only wildcard bounds force erasure:
/// - `?` resolves to the object root
/// - `? extends B` and `? super B` resolve to the erasure of `B`
///
/// Every other expression keeps its written form, so
/// `inject.Provider<demo.A>` round-trips with its type argument intact.
pub fn resolve_type_reference(expr: &TypeExpr, interner: &Interner) -> TypeReference {
    if let TypeExpr::Wildcard {
        extends_bound,
        super_bound,
    } = expr
    {
        match (extends_bound.as_deref(), super_bound.as_deref()) {
            (None, None) => {
                return TypeReference::new(interner.intern_string(OBJECT_CLASS));
            }
            (Some(bound), None) | (None, Some(bound)) => {
                return TypeReference::new(bound.erasure_atom(interner));
            }
            // A well-formed front end never supplies both bounds; keep
            // the rendered form for that leftover arm.
            (Some(_), Some(_)) => {}
        }
    }
    TypeReference::new(interner.intern_string(&expr.render(interner)))
}

#[cfg(test)]
#[path = "../tests/reference_tests.rs"]
mod tests;
