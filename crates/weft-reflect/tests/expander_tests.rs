use weft_common::Interner;
use weft_model::{ElementId, ElementInfo, ElementStore, Modifiers, ParamDecl, PrimitiveKind, TypeExpr};
use weft_reflect::{
    AccessType, FieldDirective, MethodDirective, ReflectionAccessExpander,
    ReflectionConfigurationContext, ReflectionDirective, ReflectionEntry, ReflectionManifest,
};

struct Fixture {
    interner: Interner,
    store: ElementStore,
    car: ElementId,
    vehicle_honk: ElementId,
    car_start: ElementId,
    car_drive: ElementId,
    car_park_assist: ElementId,
    car_public_ctor: ElementId,
    car_private_ctor: ElementId,
    wheels_field: ElementId,
    vin_field: ElementId,
}

fn fixture() -> Fixture {
    let interner = Interner::new();
    let store = ElementStore::new();
    let init = interner.intern_string("<init>");

    let vehicle = store.register(
        ElementInfo::class(
            interner.intern_string("Vehicle"),
            interner.intern_string("demo.Vehicle"),
        )
        .with_modifiers(Modifiers::PUBLIC),
    );
    store.register_member(
        vehicle,
        ElementInfo::method(interner.intern_string("start"), Vec::new(), TypeExpr::Void)
            .with_modifiers(Modifiers::PUBLIC),
    );
    let vehicle_honk = store.register_member(
        vehicle,
        ElementInfo::method(interner.intern_string("honk"), Vec::new(), TypeExpr::Void)
            .with_modifiers(Modifiers::PUBLIC),
    );
    let wheels_field = store.register_member(
        vehicle,
        ElementInfo::field(
            interner.intern_string("wheels"),
            TypeExpr::Primitive(PrimitiveKind::Int),
        )
        .with_modifiers(Modifiers::PUBLIC),
    );

    let car = store.register(
        ElementInfo::class(
            interner.intern_string("Car"),
            interner.intern_string("demo.Car"),
        )
        .with_modifiers(Modifiers::PUBLIC)
        .with_superclass(TypeExpr::named(interner.intern_string("demo.Vehicle"))),
    );
    let car_start = store.register_member(
        car,
        ElementInfo::method(interner.intern_string("start"), Vec::new(), TypeExpr::Void)
            .with_modifiers(Modifiers::PUBLIC),
    );
    let car_drive = store.register_member(
        car,
        ElementInfo::method(
            interner.intern_string("drive"),
            vec![ParamDecl::new(
                interner.intern_string("gearbox"),
                TypeExpr::named(interner.intern_string("demo.Gearbox")),
            )],
            TypeExpr::Void,
        )
        .with_modifiers(Modifiers::PUBLIC),
    );
    let car_park_assist = store.register_member(
        car,
        ElementInfo::method(
            interner.intern_string("parkAssist"),
            Vec::new(),
            TypeExpr::Void,
        )
        .with_modifiers(Modifiers::PRIVATE),
    );
    let vin_field = store.register_member(
        car,
        ElementInfo::field(
            interner.intern_string("vin"),
            TypeExpr::named(interner.intern_string("java.lang.String")),
        )
        .with_modifiers(Modifiers::PRIVATE),
    );
    let car_public_ctor = store.register_member(
        car,
        ElementInfo::constructor(
            init,
            vec![ParamDecl::new(
                interner.intern_string("gearbox"),
                TypeExpr::named(interner.intern_string("demo.Gearbox")),
            )],
        )
        .with_modifiers(Modifiers::PUBLIC),
    );
    let car_private_ctor = store.register_member(
        car,
        ElementInfo::constructor(init, Vec::new()).with_modifiers(Modifiers::PRIVATE),
    );

    // Parameter type referenced by explicit entries
    store.register(
        ElementInfo::class(
            interner.intern_string("Gearbox"),
            interner.intern_string("demo.Gearbox"),
        )
        .with_modifiers(Modifiers::PUBLIC),
    );

    Fixture {
        interner,
        store,
        car,
        vehicle_honk,
        car_start,
        car_drive,
        car_park_assist,
        car_public_ctor,
        car_private_ctor,
        wheels_field,
        vin_field,
    }
}

fn expand(fixture: &Fixture, directives: &[ReflectionDirective]) -> Vec<ReflectionEntry> {
    let manifest = ReflectionManifest::new(&fixture.store, &fixture.interner);
    let expander = ReflectionAccessExpander::new(&fixture.store, &fixture.interner);
    expander.expand(directives, &manifest);
    manifest.entries()
}

fn methods_of(entries: &[ReflectionEntry]) -> Vec<ElementId> {
    entries
        .iter()
        .filter_map(|e| match e {
            ReflectionEntry::Method(id) => Some(*id),
            _ => None,
        })
        .collect()
}

fn fields_of(entries: &[ReflectionEntry]) -> Vec<ElementId> {
    entries
        .iter()
        .filter_map(|e| match e {
            ReflectionEntry::Field(id) => Some(*id),
            _ => None,
        })
        .collect()
}

fn constructors_of(entries: &[ReflectionEntry]) -> Vec<ElementId> {
    entries
        .iter()
        .filter_map(|e| match e {
            ReflectionEntry::Constructor(id) => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn unresolvable_type_skips_whole_directive() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Missing")
            .with_access(AccessType::AllPublicMethods)
            .with_field(FieldDirective::new("vin"))],
    );
    assert!(entries.is_empty());
}

#[test]
fn resolved_type_is_always_registered() {
    let f = fixture();
    let entries = expand(&f, &[ReflectionDirective::new("demo.Car")]);
    assert_eq!(entries, vec![ReflectionEntry::Type(f.car)]);
}

#[test]
fn all_public_methods_includes_inherited() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllPublicMethods)],
    );
    let methods = methods_of(&entries);
    assert_eq!(methods.len(), 3);
    assert!(methods.contains(&f.car_start));
    assert!(methods.contains(&f.car_drive));
    assert!(methods.contains(&f.vehicle_honk));
    assert!(fields_of(&entries).is_empty());
    assert!(constructors_of(&entries).is_empty());
}

#[test]
fn all_declared_methods_is_any_visibility_own_type_only() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllDeclaredMethods)],
    );
    let methods = methods_of(&entries);
    assert_eq!(methods.len(), 3);
    assert!(methods.contains(&f.car_park_assist));
    assert!(!methods.contains(&f.vehicle_honk));
}

#[test]
fn all_public_fields_includes_inherited() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllPublicFields)],
    );
    assert_eq!(fields_of(&entries), vec![f.wheels_field]);
}

#[test]
fn all_declared_fields_is_own_type_any_visibility() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllDeclaredFields)],
    );
    assert_eq!(fields_of(&entries), vec![f.vin_field]);
}

#[test]
fn constructor_categories() {
    let f = fixture();
    let public = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllPublicConstructors)],
    );
    assert_eq!(constructors_of(&public), vec![f.car_public_ctor]);

    let declared = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_access(AccessType::AllDeclaredConstructors)],
    );
    let constructors = constructors_of(&declared);
    assert_eq!(constructors.len(), 2);
    assert!(constructors.contains(&f.car_private_ctor));
}

#[test]
fn flags_are_additive() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car")
            .with_access(AccessType::AllPublicMethods)
            .with_access(AccessType::AllDeclaredFields)],
    );
    assert_eq!(methods_of(&entries).len(), 3);
    assert_eq!(fields_of(&entries), vec![f.vin_field]);
}

#[test]
fn explicit_constructor_entry_binds_constructor_not_method() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_method(MethodDirective::new(
            "<init>",
            vec!["demo.Gearbox".to_string()],
        ))],
    );
    assert_eq!(constructors_of(&entries), vec![f.car_public_ctor]);
    assert!(methods_of(&entries).is_empty());
}

#[test]
fn explicit_method_entry_matches_exact_signature() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car").with_method(MethodDirective::new(
            "drive",
            vec!["demo.Gearbox".to_string()],
        ))],
    );
    assert_eq!(methods_of(&entries), vec![f.car_drive]);
}

#[test]
fn declared_method_lookup_does_not_see_inherited_members() {
    let f = fixture();
    // honk is declared on the superclass only
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car")
            .with_method(MethodDirective::new("honk", Vec::new()))],
    );
    assert!(methods_of(&entries).is_empty());
}

#[test]
fn unresolvable_parameter_type_skips_that_entry_only() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car")
            .with_method(MethodDirective::new(
                "drive",
                vec!["demo.NotInUniverse".to_string()],
            ))
            .with_method(MethodDirective::new(
                "<init>",
                vec!["demo.Gearbox".to_string()],
            ))],
    );
    assert!(methods_of(&entries).is_empty());
    assert_eq!(constructors_of(&entries), vec![f.car_public_ctor]);
}

#[test]
fn signature_mismatch_registers_nothing() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car")
            // Wrong arity for drive; wrong signature for the constructor
            .with_method(MethodDirective::new("drive", Vec::new()))
            .with_method(MethodDirective::new("<init>", vec![
                "demo.Gearbox".to_string(),
                "demo.Gearbox".to_string(),
            ]))],
    );
    assert!(methods_of(&entries).is_empty());
    assert!(constructors_of(&entries).is_empty());
    assert_eq!(entries, vec![ReflectionEntry::Type(f.car)]);
}

#[test]
fn explicit_field_entry_finds_inherited_and_private_fields() {
    let f = fixture();
    let entries = expand(
        &f,
        &[ReflectionDirective::new("demo.Car")
            .with_field(FieldDirective::new("vin"))
            .with_field(FieldDirective::new("wheels"))
            .with_field(FieldDirective::new("missing"))],
    );
    assert_eq!(fields_of(&entries), vec![f.vin_field, f.wheels_field]);
}

#[test]
fn multiple_directives_expand_independently() {
    let f = fixture();
    let entries = expand(
        &f,
        &[
            ReflectionDirective::new("demo.Missing").with_access(AccessType::AllPublicMethods),
            ReflectionDirective::new("demo.Vehicle").with_access(AccessType::AllPublicFields),
        ],
    );
    assert_eq!(fields_of(&entries), vec![f.wheels_field]);
}

#[test]
fn custom_context_receives_registrations() {
    use std::sync::Mutex;

    struct CountingContext<'a> {
        inner: &'a ReflectionManifest<'a>,
        finds: Mutex<u32>,
    }

    impl ReflectionConfigurationContext for CountingContext<'_> {
        fn find_type_by_name(&self, name: &str) -> Option<ElementId> {
            *self.finds.lock().unwrap() += 1;
            self.inner.find_type_by_name(name)
        }
        fn register_type(&self, ty: ElementId) {
            self.inner.register_type(ty);
        }
        fn register_method(&self, method: ElementId) {
            self.inner.register_method(method);
        }
        fn register_field(&self, field: ElementId) {
            self.inner.register_field(field);
        }
        fn register_constructor(&self, constructor: ElementId) {
            self.inner.register_constructor(constructor);
        }
    }

    let f = fixture();
    let manifest = ReflectionManifest::new(&f.store, &f.interner);
    let context = CountingContext {
        inner: &manifest,
        finds: Mutex::new(0),
    };
    let expander = ReflectionAccessExpander::new(&f.store, &f.interner);
    expander.expand(
        &[ReflectionDirective::new("demo.Car").with_method(MethodDirective::new(
            "drive",
            vec!["demo.Gearbox".to_string()],
        ))],
        &context,
    );
    assert_eq!(*context.finds.lock().unwrap(), 2);
    assert_eq!(methods_of(&manifest.entries()), vec![f.car_drive]);
}
