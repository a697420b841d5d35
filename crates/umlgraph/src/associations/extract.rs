//! Association extraction.
//!
//! For each class, interface and type alias, every type id referenced by a
//! member becomes an edge between the owning type and the referenced type,
//! provided the referenced id is in the catalog. Property references yield
//! [`AssociationKind::Association`]; method return types yield
//! [`AssociationKind::Dependency`].
//!
//! # Ordering
//!
//! Within a file, classes are processed before interfaces, interfaces before
//! type aliases, and each type's methods before its properties. When two
//! types reference each other, the direction processed first decides the
//! edge kind, so this order is what makes output reproducible.

use log::trace;

use umlgraph_core::{
    association::{AssociationEnd, AssociationKind, MemberAssociation, Multiplicity},
    declaration::{CompoundType, FileDeclaration, TypeEntity, TypeKind},
    identifier::Id,
};

use super::{AssociationSet, EdgeKey};
use crate::catalog::TypeCatalog;

/// Order in which the kinds of one file are visited.
const KIND_ORDER: [TypeKind; 3] = [TypeKind::Class, TypeKind::Interface, TypeKind::TypeAlias];

/// Guesses the multiplicity of a member from its type text.
///
/// Any `[` in the text (`Animal[]`, `(A | B)[]`) means "zero or more";
/// everything else is left unspecified. This is a textual heuristic: it
/// does not recognize `Array<T>`, `ReadonlyArray<T>` or other collections,
/// and a tuple type such as `[A, B]` also counts as many.
pub fn multiplicity_hint(type_text: Option<&str>) -> Option<Multiplicity> {
    match type_text {
        Some(text) if text.contains('[') => Some(Multiplicity::ZeroOrMany),
        _ => None,
    }
}

/// Creates and merges edges into an [`AssociationSet`].
pub struct AssociationExtractor<'c, 'a> {
    catalog: &'c TypeCatalog<'a>,
    associations: AssociationSet,
}

impl<'c, 'a> AssociationExtractor<'c, 'a> {
    pub fn new(catalog: &'c TypeCatalog<'a>) -> Self {
        Self {
            catalog,
            associations: AssociationSet::new(),
        }
    }

    /// Extracts the edges owned by the types declared in `file`.
    ///
    /// Returns the keys of the edges this file created, in creation order.
    /// References that merged into an edge created elsewhere are not
    /// included.
    pub fn extract_file(&mut self, file: &FileDeclaration) -> Vec<EdgeKey> {
        let mut created = Vec::new();

        for kind in KIND_ORDER {
            let owners = file
                .types()
                .iter()
                .filter(|entity| entity.kind() == kind)
                .filter_map(TypeEntity::compound);
            for owner in owners {
                self.extract_type(owner, &mut created);
            }
        }

        trace!(file = file.file_name(), created = created.len(); "File associations extracted");
        created
    }

    /// Extracts the edges of a single type, methods first.
    pub fn extract_type(&mut self, owner: &CompoundType, created: &mut Vec<EdgeKey>) {
        for method in owner.methods() {
            let hint = multiplicity_hint(method.return_type());
            for &referenced in method.referenced_type_ids() {
                created.extend(self.link(owner, referenced, hint, AssociationKind::Dependency));
            }
        }

        for property in owner.properties() {
            let hint = multiplicity_hint(property.declared_type());
            for &referenced in property.referenced_type_ids() {
                created.extend(self.link(owner, referenced, hint, AssociationKind::Association));
            }
        }
    }

    /// Consumes the extractor and returns the working edge set.
    pub fn finish(self) -> AssociationSet {
        self.associations
    }

    /// Records one member reference. Returns the key of a newly created edge.
    fn link(
        &mut self,
        owner: &CompoundType,
        referenced: Id,
        hint: Option<Multiplicity>,
        kind: AssociationKind,
    ) -> Option<EdgeKey> {
        let Some(target) = self.catalog.get(referenced) else {
            trace!(owner:% = owner.id(), referenced:% = referenced; "Unresolved reference skipped");
            return None;
        };

        // The other side already recorded this pair: its kind stands, and the
        // end of the type being referenced takes this member's multiplicity.
        if let Some(existing) = self.associations.get_mut(referenced, owner.id()) {
            if let Some(end) = existing.end_mut(referenced) {
                end.set_multiplicity(hint);
            }
            trace!(owner:% = owner.id(), referenced:% = referenced; "Reverse reference merged");
            return None;
        }

        if self.associations.contains(owner.id(), referenced) {
            return None;
        }

        let association = MemberAssociation::new(
            AssociationEnd::new(owner.id(), owner.name(), None),
            AssociationEnd::new(referenced, target.name(), hint),
            kind,
        );
        let key = (owner.id(), referenced);
        self.associations.insert(key, association);
        trace!(owner:% = owner.id(), referenced:% = referenced, kind:?; "Association created");
        Some(key)
    }
}
