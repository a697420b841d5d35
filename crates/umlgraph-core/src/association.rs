//! Relationship edges between declared types.
//!
//! A [`MemberAssociation`] joins two [`AssociationEnd`]s. The pair is
//! unordered in meaning: whichever type was processed first becomes end
//! `a`, and a reference from the other side is folded into the same edge
//! rather than producing a second one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// Cardinality annotation on one end of a relationship.
///
/// An absent multiplicity (`Option::None`) renders as unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplicity {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "0..1")]
    ZeroOrOne,
    #[serde(rename = "1..*")]
    OneOrMany,
    #[serde(rename = "0..*")]
    ZeroOrMany,
}

impl Multiplicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplicity::One => "1",
            Multiplicity::ZeroOrOne => "0..1",
            Multiplicity::OneOrMany => "1..*",
            Multiplicity::ZeroOrMany => "0..*",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of relationship between two types.
///
/// Only [`AssociationKind::Association`] (a property holds the other type)
/// and [`AssociationKind::Dependency`] (a method returns the other type)
/// are produced by the graph builder today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssociationKind {
    #[default]
    Association,
    Dependency,
    Aggregation,
    Composition,
}

/// One end of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationEnd {
    type_id: Id,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    multiplicity: Option<Multiplicity>,
}

impl AssociationEnd {
    pub fn new(type_id: Id, name: impl Into<String>, multiplicity: Option<Multiplicity>) -> Self {
        Self {
            type_id,
            name: name.into(),
            multiplicity,
        }
    }

    pub fn type_id(&self) -> Id {
        self.type_id
    }

    /// Display name of the type at this end.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplicity(&self) -> Option<Multiplicity> {
        self.multiplicity
    }

    pub fn set_multiplicity(&mut self, multiplicity: Option<Multiplicity>) {
        self.multiplicity = multiplicity;
    }
}

/// A relationship edge between two declared types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAssociation {
    a: AssociationEnd,
    b: AssociationEnd,
    kind: AssociationKind,
    #[serde(skip)]
    inherited: bool,
}

impl MemberAssociation {
    pub fn new(a: AssociationEnd, b: AssociationEnd, kind: AssociationKind) -> Self {
        Self {
            a,
            b,
            kind,
            inherited: false,
        }
    }

    pub fn a(&self) -> &AssociationEnd {
        &self.a
    }

    pub fn b(&self) -> &AssociationEnd {
        &self.b
    }

    pub fn kind(&self) -> AssociationKind {
        self.kind
    }

    /// Returns `true` once an ancestor of end `a` was found to carry the
    /// same relationship.
    pub fn is_inherited(&self) -> bool {
        self.inherited
    }

    /// Flags the edge as redundant with an ancestor's edge.
    ///
    /// The flag is never cleared.
    pub fn mark_inherited(&mut self) {
        self.inherited = true;
    }

    /// Returns the end belonging to `type_id`, preferring `a` when both ends
    /// name the same type.
    pub fn end(&self, type_id: Id) -> Option<&AssociationEnd> {
        if self.a.type_id == type_id {
            Some(&self.a)
        } else if self.b.type_id == type_id {
            Some(&self.b)
        } else {
            None
        }
    }

    /// Mutable counterpart of [`MemberAssociation::end`].
    pub fn end_mut(&mut self, type_id: Id) -> Option<&mut AssociationEnd> {
        if self.a.type_id == type_id {
            Some(&mut self.a)
        } else if self.b.type_id == type_id {
            Some(&mut self.b)
        } else {
            None
        }
    }
}
