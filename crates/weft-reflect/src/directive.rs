//! Declarative reflection directives.
//!
//! Directives are read-only inputs produced per class by the
//! annotation-metadata collaborator; this crate deserializes and
//! consumes them, never mutates them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Sentinel method name denoting a constructor. A directive method
/// entry with this name is looked up among constructors, never among
/// methods.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Suffix of the generated per-class entry points that carry reflection
/// directives into the build.
pub const REFLECT_CONFIG_CLASS_SUFFIX: &str = "$ReflectConfig";

/// One blanket member-access category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    AllPublicMethods,
    AllDeclaredMethods,
    AllPublicFields,
    AllDeclaredFields,
    AllPublicConstructors,
    AllDeclaredConstructors,
}

bitflags! {
    /// The access categories requested by one directive. Categories are
    /// independent and additive.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AccessFlags: u8 {
        const PUBLIC_METHODS = 1 << 0;
        const DECLARED_METHODS = 1 << 1;
        const PUBLIC_FIELDS = 1 << 2;
        const DECLARED_FIELDS = 1 << 3;
        const PUBLIC_CONSTRUCTORS = 1 << 4;
        const DECLARED_CONSTRUCTORS = 1 << 5;
    }
}

impl AccessType {
    /// The flag bit for this category.
    pub const fn flag(self) -> AccessFlags {
        match self {
            Self::AllPublicMethods => AccessFlags::PUBLIC_METHODS,
            Self::AllDeclaredMethods => AccessFlags::DECLARED_METHODS,
            Self::AllPublicFields => AccessFlags::PUBLIC_FIELDS,
            Self::AllDeclaredFields => AccessFlags::DECLARED_FIELDS,
            Self::AllPublicConstructors => AccessFlags::PUBLIC_CONSTRUCTORS,
            Self::AllDeclaredConstructors => AccessFlags::DECLARED_CONSTRUCTORS,
        }
    }
}

impl FromIterator<AccessType> for AccessFlags {
    fn from_iter<I: IntoIterator<Item = AccessType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |flags, access| flags | access.flag())
    }
}

/// One explicit method (or constructor) to keep accessible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDirective {
    pub name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
}

impl MethodDirective {
    pub fn new(name: impl Into<String>, parameter_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types,
        }
    }

    /// Whether this entry names a constructor rather than a method.
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }
}

/// One explicit field to keep accessible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDirective {
    pub name: String,
}

impl FieldDirective {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One declarative instruction: a target type plus the reflective
/// access that must be preserved for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionDirective {
    /// Qualified name of the target type.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Blanket access categories.
    #[serde(default)]
    pub access_type: Vec<AccessType>,

    /// Explicit method/constructor entries.
    #[serde(default)]
    pub methods: Vec<MethodDirective>,

    /// Explicit field entries.
    #[serde(default)]
    pub fields: Vec<FieldDirective>,
}

impl ReflectionDirective {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            access_type: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_access(mut self, access: AccessType) -> Self {
        self.access_type.push(access);
        self
    }

    pub fn with_method(mut self, method: MethodDirective) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldDirective) -> Self {
        self.fields.push(field);
        self
    }

    /// The requested categories collected into flags.
    pub fn access_flags(&self) -> AccessFlags {
        self.access_type.iter().copied().collect()
    }
}
