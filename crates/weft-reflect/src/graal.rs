//! Closed-world reflect-config emission.
//!
//! The native-image build tool consumes one JSON object per reachable
//! type, listing the members that must stay reflectively accessible.
//! This module collapses an accumulated manifest into that shape.

use crate::context::ReflectionEntry;
use crate::directive::CONSTRUCTOR_NAME;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Map, Value, json};
use weft_common::Interner;
use weft_model::{ElementId, ElementStore};

struct TypeConfig {
    name: String,
    methods: Vec<Value>,
    fields: Vec<Value>,
}

/// Collapse accumulated registrations into reflect-config JSON.
///
/// Types appear in first-registration order; duplicate registrations
/// collapse to one entry. Members whose owning type cannot be resolved
/// in the store are dropped silently, like every other unresolvable
/// input on this path.
pub fn reflect_config_json(
    entries: &[ReflectionEntry],
    store: &ElementStore,
    interner: &Interner,
) -> Value {
    let mut order: Vec<ElementId> = Vec::new();
    let mut configs: FxHashMap<ElementId, TypeConfig> = FxHashMap::default();
    let mut seen: FxHashSet<ReflectionEntry> = FxHashSet::default();

    for &entry in entries {
        if !seen.insert(entry) {
            continue;
        }
        match entry {
            ReflectionEntry::Type(id) => {
                ensure_config(&mut order, &mut configs, id, store, interner);
            }
            ReflectionEntry::Method(id) | ReflectionEntry::Constructor(id) => {
                let Some(owner) = store.get_enclosing(id) else {
                    continue;
                };
                let Some(info) = store.get(id) else {
                    continue;
                };
                let Some(config) = ensure_config(&mut order, &mut configs, owner, store, interner)
                else {
                    continue;
                };
                let name = if matches!(entry, ReflectionEntry::Constructor(_)) {
                    CONSTRUCTOR_NAME.to_string()
                } else {
                    interner.resolve_atom(info.name).to_string()
                };
                let parameter_types: Vec<Value> = info
                    .params
                    .iter()
                    .map(|p| Value::String(p.ty.erasure_name(interner)))
                    .collect();
                config
                    .methods
                    .push(json!({ "name": name, "parameterTypes": parameter_types }));
            }
            ReflectionEntry::Field(id) => {
                let Some(owner) = store.get_enclosing(id) else {
                    continue;
                };
                let Some(info) = store.get(id) else {
                    continue;
                };
                let Some(config) = ensure_config(&mut order, &mut configs, owner, store, interner)
                else {
                    continue;
                };
                config
                    .fields
                    .push(json!({ "name": interner.resolve_atom(info.name).to_string() }));
            }
        }
    }

    Value::Array(
        order
            .into_iter()
            .filter_map(|id| configs.remove(&id))
            .map(|config| {
                let mut object = Map::new();
                object.insert("name".to_string(), Value::String(config.name));
                if !config.methods.is_empty() {
                    object.insert("methods".to_string(), Value::Array(config.methods));
                }
                if !config.fields.is_empty() {
                    object.insert("fields".to_string(), Value::Array(config.fields));
                }
                Value::Object(object)
            })
            .collect(),
    )
}

/// Pretty-printed reflect-config text.
pub fn to_reflect_config_string(
    entries: &[ReflectionEntry],
    store: &ElementStore,
    interner: &Interner,
) -> String {
    let value = reflect_config_json(entries, store, interner);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| String::from("[]"))
}

fn ensure_config<'m>(
    order: &mut Vec<ElementId>,
    configs: &'m mut FxHashMap<ElementId, TypeConfig>,
    id: ElementId,
    store: &ElementStore,
    interner: &Interner,
) -> Option<&'m mut TypeConfig> {
    if !configs.contains_key(&id) {
        let qualified = store.get_qualified_name(id)?;
        configs.insert(
            id,
            TypeConfig {
                name: interner.resolve_atom(qualified).to_string(),
                methods: Vec::new(),
                fields: Vec::new(),
            },
        );
        order.push(id);
    }
    configs.get_mut(&id)
}
