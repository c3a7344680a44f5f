//! Use-site annotations.

use weft_common::Atom;

/// One annotation present on a program element, together with the
/// meta-annotation types (stereotypes) found on its declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    name: Atom,
    stereotypes: Vec<Atom>,
}

impl Annotation {
    pub fn new(name: Atom) -> Self {
        Self {
            name,
            stereotypes: Vec::new(),
        }
    }

    pub fn with_stereotypes(mut self, stereotypes: Vec<Atom>) -> Self {
        self.stereotypes = stereotypes;
        self
    }

    /// Qualified name of the annotation type.
    pub fn name(&self) -> Atom {
        self.name
    }

    pub fn stereotypes(&self) -> &[Atom] {
        &self.stereotypes
    }

    /// Whether this annotation's declaration carries the given
    /// meta-annotation, or is that annotation itself.
    pub fn has_stereotype(&self, stereotype: Atom) -> bool {
        self.name == stereotype || self.stereotypes.contains(&stereotype)
    }
}

/// Find the first annotation matching the given stereotype.
pub fn find_annotation_with_stereotype(
    stereotype: Atom,
    annotations: &[Annotation],
) -> Option<&Annotation> {
    annotations.iter().find(|a| a.has_stereotype(stereotype))
}
