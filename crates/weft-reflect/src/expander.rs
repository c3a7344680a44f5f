//! Expansion of reflection directives into concrete registrations.

use crate::context::ReflectionConfigurationContext;
use crate::directive::{AccessFlags, MethodDirective, ReflectionDirective};
use tracing::trace;
use weft_common::{Atom, Interner};
use weft_model::{ElementId, ElementStore};

/// Expands declarative directives against the element store, emitting
/// concrete registrations into a context.
///
/// Every resolution failure is a silent, local skip: an unresolvable
/// target type drops its whole directive, an unresolvable explicit
/// entry drops that entry only, and a signature that matches nothing
/// drops nothing else. No error ever surfaces from here.
pub struct ReflectionAccessExpander<'a> {
    store: &'a ElementStore,
    interner: &'a Interner,
}

impl<'a> ReflectionAccessExpander<'a> {
    pub fn new(store: &'a ElementStore, interner: &'a Interner) -> Self {
        Self { store, interner }
    }

    /// Expand every directive in order.
    pub fn expand(
        &self,
        directives: &[ReflectionDirective],
        context: &dyn ReflectionConfigurationContext,
    ) {
        for directive in directives {
            self.expand_one(directive, context);
        }
    }

    fn expand_one(
        &self,
        directive: &ReflectionDirective,
        context: &dyn ReflectionConfigurationContext,
    ) {
        let Some(target) = context.find_type_by_name(&directive.type_name) else {
            trace!(type_name = %directive.type_name, "directive target not resolvable, skipping");
            return;
        };
        context.register_type(target);

        let flags = directive.access_flags();
        if flags.contains(AccessFlags::PUBLIC_METHODS) {
            for method in self.store.public_methods(target, self.interner) {
                context.register_method(method);
            }
        }
        if flags.contains(AccessFlags::DECLARED_METHODS) {
            for method in self.store.declared_methods(target) {
                context.register_method(method);
            }
        }
        if flags.contains(AccessFlags::PUBLIC_FIELDS) {
            for field in self.store.public_fields(target, self.interner) {
                context.register_field(field);
            }
        }
        if flags.contains(AccessFlags::DECLARED_FIELDS) {
            for field in self.store.declared_fields(target) {
                context.register_field(field);
            }
        }
        if flags.contains(AccessFlags::PUBLIC_CONSTRUCTORS) {
            for constructor in self.store.public_constructors(target) {
                context.register_constructor(constructor);
            }
        }
        if flags.contains(AccessFlags::DECLARED_CONSTRUCTORS) {
            for constructor in self.store.declared_constructors(target) {
                context.register_constructor(constructor);
            }
        }

        for method in &directive.methods {
            self.expand_method_entry(target, method, context);
        }
        for field in &directive.fields {
            let name = self.interner.intern_string(&field.name);
            if let Some(found) = self.store.find_field(target, name, self.interner) {
                context.register_field(found);
            }
        }
    }

    /// Resolve one explicit method entry. A single unresolvable
    /// parameter type abandons the entry; a lookup miss registers
    /// nothing.
    fn expand_method_entry(
        &self,
        target: ElementId,
        entry: &MethodDirective,
        context: &dyn ReflectionConfigurationContext,
    ) {
        let mut param_erasures: Vec<Atom> = Vec::with_capacity(entry.parameter_types.len());
        for type_name in &entry.parameter_types {
            let Some(param_type) = context.find_type_by_name(type_name) else {
                trace!(
                    method = %entry.name,
                    parameter_type = %type_name,
                    "parameter type not resolvable, skipping entry"
                );
                return;
            };
            let Some(qualified) = self.store.get_qualified_name(param_type) else {
                return;
            };
            param_erasures.push(qualified);
        }

        if entry.is_constructor() {
            if let Some(constructor) =
                self.store
                    .find_declared_constructor(target, &param_erasures, self.interner)
            {
                context.register_constructor(constructor);
            }
        } else {
            let name = self.interner.intern_string(&entry.name);
            if let Some(method) =
                self.store
                    .find_declared_method(target, name, &param_erasures, self.interner)
            {
                context.register_method(method);
            }
        }
    }
}
