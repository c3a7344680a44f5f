//! Building argument metadata for injectable slots.
//!
//! The injection container consumes one `Argument` per constructor or
//! method parameter (and per injected field). The factory methods here
//! combine reference resolution with the slot's annotations and expand
//! the slot's own generic type variables into nested arguments.

use crate::reference_resolver::resolve_type_reference;
use crate::resolver::GenericTypeResolver;
use weft_common::Atom;
use weft_common::limits::MAX_TYPE_VARIABLE_DEPTH;
use weft_model::{Annotation, Argument, ElementId, ParamDecl, TypeExpr, find_annotation_with_stereotype};

impl GenericTypeResolver<'_> {
    /// Build the argument metadata for one formal parameter.
    ///
    /// The qualifier is the first parameter annotation carrying
    /// `qualifier_stereotype`, if any.
    pub fn argument_for_parameter(
        &self,
        param: &ParamDecl,
        qualifier_stereotype: Atom,
    ) -> Argument {
        self.build_argument(param.name, &param.ty, &param.annotations, qualifier_stereotype, 0)
    }

    /// Build argument metadata for every formal parameter of a method or
    /// constructor, in declaration order.
    pub fn method_arguments(&self, method: ElementId, qualifier_stereotype: Atom) -> Vec<Argument> {
        let Some(info) = self.store.get(method) else {
            return Vec::new();
        };
        info.params
            .iter()
            .map(|param| self.argument_for_parameter(param, qualifier_stereotype))
            .collect()
    }

    /// Build argument metadata for a field slot.
    pub fn field_argument(&self, field: ElementId, qualifier_stereotype: Atom) -> Option<Argument> {
        let info = self.store.get(field)?;
        let ty = info.field_type?;
        Some(self.build_argument(info.name, &ty, &info.annotations, qualifier_stereotype, 0))
    }

    fn build_argument(
        &self,
        name: Atom,
        ty: &TypeExpr,
        annotations: &[Annotation],
        qualifier_stereotype: Atom,
        depth: u32,
    ) -> Argument {
        let reference = resolve_type_reference(ty, self.interner);
        let qualifier = find_annotation_with_stereotype(qualifier_stereotype, annotations).cloned();
        let generics = if depth >= MAX_TYPE_VARIABLE_DEPTH {
            Vec::new()
        } else {
            self.nested_arguments(ty, qualifier_stereotype, depth)
        };
        Argument::new(reference, name, qualifier, annotations.to_vec(), generics)
    }

    /// One nested argument per generic parameter of `ty`, paired
    /// positionally with the supplied arguments. Arity mismatches yield
    /// no nested arguments at all.
    fn nested_arguments(
        &self,
        ty: &TypeExpr,
        qualifier_stereotype: Atom,
        depth: u32,
    ) -> Vec<Argument> {
        match ty {
            TypeExpr::Named { name, args } => {
                let Some(target) = self.store.type_by_name(*name) else {
                    return Vec::new();
                };
                let Some(info) = self.store.get(target) else {
                    return Vec::new();
                };
                if info.type_params.len() != args.len() {
                    return Vec::new();
                }
                info.type_params
                    .iter()
                    .zip(args)
                    .map(|(param, arg)| {
                        self.build_argument(param.name, arg, &[], qualifier_stereotype, depth + 1)
                    })
                    .collect()
            }
            TypeExpr::Variable { bound, .. } => match bound.as_deref() {
                Some(upper @ TypeExpr::Named { .. }) => {
                    self.nested_arguments(upper, qualifier_stereotype, depth)
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/argument_factory_tests.rs"]
mod tests;
