//! Generic-type resolution over the element graph.

use crate::binding::GenericBinding;
use crate::reference_resolver::resolve_type_reference;
use tracing::trace;
use weft_common::limits::MAX_ENCLOSING_CHAIN;
use weft_common::{Atom, Interner};
use weft_model::{ElementId, ElementStore, TypeExpr};

/// Resolves generic structure against a store and interner borrowed for
/// the duration of one analysis pass.
///
/// This is a pure read-side computation: it never mutates the store and
/// never fails. Anything it cannot resolve comes back empty or absent.
pub struct GenericTypeResolver<'a> {
    pub(crate) store: &'a ElementStore,
    pub(crate) interner: &'a Interner,
}

impl<'a> GenericTypeResolver<'a> {
    pub fn new(store: &'a ElementStore, interner: &'a Interner) -> Self {
        Self { store, interner }
    }

    /// The type arguments supplied to a *directly* implemented
    /// interface.
    ///
    /// For `class AProvider implements Provider<A>` and
    /// `interface_name = "inject.Provider"`, returns `[A]`.
    ///
    /// Only the class's own implements clause is scanned: interfaces
    /// reachable through a superclass or through another interface are
    /// invisible here.
    pub fn interface_generic_types_for(
        &self,
        class: ElementId,
        interface_name: &str,
    ) -> Vec<TypeExpr> {
        let Some(info) = self.store.get(class) else {
            return Vec::new();
        };
        for declared in &info.interfaces {
            if declared.erasure_name(self.interner) == interface_name {
                return declared.type_arguments().to_vec();
            }
        }
        Vec::new()
    }

    /// The first type argument supplied to a directly implemented
    /// interface.
    pub fn interface_generic_type_for(
        &self,
        class: ElementId,
        interface_name: &str,
    ) -> Option<TypeExpr> {
        self.interface_generic_types_for(class, interface_name)
            .into_iter()
            .next()
    }

    /// Resolve which references are bound to the generic parameters of a
    /// type expression.
    ///
    /// - primitives, `void`, arrays, and wildcards carry no bindings
    /// - a named reference pairs the referenced type's declared
    ///   parameters positionally with the supplied arguments, iff the
    ///   counts match; a mismatch yields an empty binding, never a
    ///   partial one
    /// - a type variable delegates to its upper bound when that bound is
    ///   itself a named type
    pub fn resolve_generic_bindings(&self, expr: &TypeExpr) -> GenericBinding {
        match expr {
            TypeExpr::Primitive(_) | TypeExpr::Void | TypeExpr::Array(_) => GenericBinding::new(),
            TypeExpr::Named { name, args } => self.resolve_named_bindings(*name, args),
            TypeExpr::Variable { bound, .. } => match bound.as_deref() {
                Some(upper @ TypeExpr::Named { .. }) => self.resolve_generic_bindings(upper),
                _ => GenericBinding::new(),
            },
            TypeExpr::Wildcard { .. } => GenericBinding::new(),
        }
    }

    fn resolve_named_bindings(&self, name: Atom, args: &[TypeExpr]) -> GenericBinding {
        let mut binding = GenericBinding::new();
        let Some(target) = self.store.type_by_name(name) else {
            return binding;
        };
        let Some(info) = self.store.get(target) else {
            return binding;
        };
        if info.type_params.len() != args.len() {
            trace!(
                declared = info.type_params.len(),
                supplied = args.len(),
                "generic arity mismatch, no bindings"
            );
            return binding;
        }
        for (param, arg) in info.type_params.iter().zip(args) {
            binding.insert(param.name, resolve_type_reference(arg, self.interner));
        }
        binding
    }

    /// Resolve the declared bound of a type variable by walking the
    /// chain of lexically enclosing declarations, starting at the
    /// declaration enclosing `from`.
    ///
    /// A level yields the bound when it declares a generic parameter
    /// with this name that has exactly one bound and that bound is a
    /// named type; any other shape at that level keeps the walk moving
    /// outward. Reaching the root without a match yields `None`.
    pub fn resolve_type_variable_bound(
        &self,
        from: ElementId,
        var_name: Atom,
    ) -> Option<TypeExpr> {
        let mut enclosing = self.store.get_enclosing(from);
        let mut hops = 0;
        while let Some(level) = enclosing {
            if hops >= MAX_ENCLOSING_CHAIN {
                return None;
            }
            hops += 1;
            let info = self.store.get(level)?;
            if !info.kind.is_parameterizable() {
                return None;
            }
            for param in &info.type_params {
                if param.name == var_name
                    && param.bounds.len() == 1
                    && matches!(param.bounds[0], TypeExpr::Named { .. })
                {
                    return Some(param.bounds[0].clone());
                }
            }
            enclosing = info.enclosing;
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
