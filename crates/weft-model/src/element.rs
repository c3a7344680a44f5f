//! Element identifiers and element records.
//!
//! An *element* is one program declaration: a class, interface, method,
//! constructor, or field. Elements replace runtime reflection objects
//! with static symbol handles: an `ElementId` has stable identity for
//! the lifetime of a store, and an `ElementInfo` is the immutable record
//! behind it.

use crate::annotation::Annotation;
use crate::type_expr::TypeExpr;
use bitflags::bitflags;
use smallvec::SmallVec;
use weft_common::Atom;

/// Stable identifier for one program element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Sentinel value for an invalid `ElementId`.
    pub const INVALID: Self = Self(0);

    /// First valid `ElementId`.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `ElementId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

/// Kind of program element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Interface,
    Method,
    Constructor,
    Field,
}

impl ElementKind {
    /// Whether elements of this kind can appear in the type index.
    pub const fn is_type(self) -> bool {
        matches!(self, Self::Class | Self::Interface)
    }

    /// Whether elements of this kind can declare generic parameters.
    pub const fn is_parameterizable(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Method | Self::Constructor
        )
    }
}

bitflags! {
    /// Declaration modifiers.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
    }
}

impl Modifiers {
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }
}

/// A declared generic parameter and its declared bounds.
///
/// Most parameters carry zero or one bound; intersection bounds
/// (`T extends A & B`) are rare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParamDecl {
    pub name: Atom,
    pub bounds: SmallVec<[TypeExpr; 1]>,
}

impl TypeParamDecl {
    /// An unbounded parameter.
    pub fn new(name: Atom) -> Self {
        Self {
            name,
            bounds: SmallVec::new(),
        }
    }

    /// A parameter with a single declared bound.
    pub fn bounded(name: Atom, bound: TypeExpr) -> Self {
        Self {
            name,
            bounds: SmallVec::from_vec(vec![bound]),
        }
    }

    pub fn with_bounds(mut self, bounds: Vec<TypeExpr>) -> Self {
        self.bounds = SmallVec::from_vec(bounds);
        self
    }
}

/// One formal parameter of a method or constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: Atom,
    pub ty: TypeExpr,
    pub annotations: Vec<Annotation>,
}

impl ParamDecl {
    pub fn new(name: Atom, ty: TypeExpr) -> Self {
        Self {
            name,
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Complete information about one program element.
///
/// This is stored in `ElementStore` and retrieved by `ElementId`.
#[derive(Clone, Debug)]
pub struct ElementInfo {
    /// Kind of element (decides which optional sections are meaningful)
    pub kind: ElementKind,

    /// Simple name (constructors use the `<init>` sentinel)
    pub name: Atom,

    /// Qualified name; for members this equals the simple name
    pub qualified_name: Atom,

    /// Declaration modifiers
    pub modifiers: Modifiers,

    /// Lexically enclosing element (method for a local class, class for
    /// a member, outer class for a nested class)
    pub enclosing: Option<ElementId>,

    /// Declared generic parameters, in declaration order
    pub type_params: Vec<TypeParamDecl>,

    /// Annotations present on the declaration, in source order
    pub annotations: Vec<Annotation>,

    /// For classes: the extends clause as written (possibly generic)
    pub superclass: Option<TypeExpr>,

    /// For classes/interfaces: the direct implements/extends-interfaces
    /// clause as written, in declaration order
    pub interfaces: Vec<TypeExpr>,

    /// For classes/interfaces: declared members, in declaration order
    pub members: Vec<ElementId>,

    /// For methods/constructors: formal parameters
    pub params: Vec<ParamDecl>,

    /// For methods: declared return type
    pub return_type: Option<TypeExpr>,

    /// For fields: declared type
    pub field_type: Option<TypeExpr>,
}

impl ElementInfo {
    fn bare(kind: ElementKind, name: Atom, qualified_name: Atom) -> Self {
        Self {
            kind,
            name,
            qualified_name,
            modifiers: Modifiers::empty(),
            enclosing: None,
            type_params: Vec::new(),
            annotations: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            params: Vec::new(),
            return_type: None,
            field_type: None,
        }
    }

    /// Create a new class element.
    pub fn class(name: Atom, qualified_name: Atom) -> Self {
        Self::bare(ElementKind::Class, name, qualified_name)
    }

    /// Create a new interface element.
    pub fn interface(name: Atom, qualified_name: Atom) -> Self {
        Self::bare(ElementKind::Interface, name, qualified_name)
    }

    /// Create a new method element.
    pub fn method(name: Atom, params: Vec<ParamDecl>, return_type: TypeExpr) -> Self {
        let mut info = Self::bare(ElementKind::Method, name, name);
        info.params = params;
        info.return_type = Some(return_type);
        info
    }

    /// Create a new constructor element. `name` is the `<init>` sentinel
    /// atom.
    pub fn constructor(name: Atom, params: Vec<ParamDecl>) -> Self {
        let mut info = Self::bare(ElementKind::Constructor, name, name);
        info.params = params;
        info
    }

    /// Create a new field element.
    pub fn field(name: Atom, ty: TypeExpr) -> Self {
        let mut info = Self::bare(ElementKind::Field, name, name);
        info.field_type = Some(ty);
        info
    }

    /// Set declaration modifiers.
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the lexically enclosing element.
    pub const fn with_enclosing(mut self, enclosing: ElementId) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    /// Set declared generic parameters.
    pub fn with_type_params(mut self, type_params: Vec<TypeParamDecl>) -> Self {
        self.type_params = type_params;
        self
    }

    /// Set declaration annotations.
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Set the extends clause for a class.
    pub fn with_superclass(mut self, superclass: TypeExpr) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Set the direct implements clause.
    pub fn with_interfaces(mut self, interfaces: Vec<TypeExpr>) -> Self {
        self.interfaces = interfaces;
        self
    }
}
