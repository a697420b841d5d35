//! The type catalog: every declared type across all files, indexed by id.
//!
//! Lookups that miss are normal. Primitives, third-party types and generic
//! type parameters never appear in the catalog, and callers treat a miss as
//! "no relationship" rather than as an error.

use std::collections::HashMap;

use log::{debug, warn};

use umlgraph_core::{
    declaration::{FileDeclaration, TypeEntity},
    identifier::Id,
};

/// A type id that was declared more than once.
///
/// The later declaration replaced the earlier one in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    id: Id,
    replaced_file: String,
    replacing_file: String,
}

impl DuplicateId {
    pub fn id(&self) -> Id {
        self.id
    }

    /// File of the declaration that was dropped.
    pub fn replaced_file(&self) -> &str {
        &self.replaced_file
    }

    /// File of the declaration that is kept.
    pub fn replacing_file(&self) -> &str {
        &self.replacing_file
    }
}

#[derive(Debug, Clone, Copy)]
struct CatalogEntry<'a> {
    entity: &'a TypeEntity,
    file_name: &'a str,
}

/// Read-only index from type id to declared type.
///
/// Borrows the declarations it was built from.
#[derive(Debug, Default)]
pub struct TypeCatalog<'a> {
    entries: HashMap<Id, CatalogEntry<'a>>,
    duplicates: Vec<DuplicateId>,
}

impl<'a> TypeCatalog<'a> {
    /// Indexes every class, interface, type alias and enum in `files`.
    ///
    /// If two declarations share an id, the one seen last wins and the
    /// collision is logged and recorded in [`TypeCatalog::duplicates`].
    pub fn build(files: &'a [FileDeclaration]) -> Self {
        let mut catalog = Self::default();

        for file in files {
            for entity in file.types() {
                let entry = CatalogEntry {
                    entity,
                    file_name: file.file_name(),
                };
                if let Some(previous) = catalog.entries.insert(entity.id(), entry) {
                    warn!(
                        id:% = entity.id(),
                        replaced_file = previous.file_name,
                        replacing_file = file.file_name();
                        "Duplicate type id, keeping the last declaration"
                    );
                    catalog.duplicates.push(DuplicateId {
                        id: entity.id(),
                        replaced_file: previous.file_name.to_owned(),
                        replacing_file: file.file_name().to_owned(),
                    });
                }
            }
        }

        debug!(types = catalog.entries.len(); "Type catalog built");
        catalog
    }

    /// Looks up a declared type. `None` means the id is not modeled.
    pub fn get(&self, id: Id) -> Option<&'a TypeEntity> {
        self.entries.get(&id).map(|entry| entry.entity)
    }

    /// Returns the file that declares `id`.
    pub fn file_of(&self, id: Id) -> Option<&'a str> {
        self.entries.get(&id).map(|entry| entry.file_name)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id collisions encountered while building, in input order.
    pub fn duplicates(&self) -> &[DuplicateId] {
        &self.duplicates
    }
}
