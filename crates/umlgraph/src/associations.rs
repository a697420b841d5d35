//! Member associations between declared types.
//!
//! This module turns member-to-type references into the deduplicated edge
//! list each file hands to the renderer. The pipeline runs in three stages
//! over one shared [`AssociationSet`]:
//!
//! 1. [`extract`] creates an edge per referenced pair of types, folding
//!    reciprocal references into a single edge.
//! 2. [`inheritance`] flags edges that an ancestor type already carries.
//! 3. [`finalize`] writes each file's surviving edges into its
//!    [`FileDeclaration`].
//!
//! The set keeps flagged edges so that later redundancy checks, including
//! ones across files, still see them.

pub mod extract;
pub mod finalize;
pub mod inheritance;

use indexmap::IndexMap;
use log::{debug, info};

use umlgraph_core::{association::MemberAssociation, declaration::FileDeclaration, identifier::Id};

use crate::catalog::TypeCatalog;

pub use extract::AssociationExtractor;

/// Key of an edge: `(a, b)` where `a` is the type whose reference created it.
pub type EdgeKey = (Id, Id);

/// The working edge set, in creation order.
///
/// At most one edge exists per unordered pair of types; the extractor checks
/// both key orientations before inserting.
#[derive(Debug, Default, Clone)]
pub struct AssociationSet {
    edges: IndexMap<EdgeKey, MemberAssociation>,
}

impl AssociationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the edge created by `source` referencing `target`.
    pub fn get(&self, source: Id, target: Id) -> Option<&MemberAssociation> {
        self.edges.get(&(source, target))
    }

    pub fn get_mut(&mut self, source: Id, target: Id) -> Option<&mut MemberAssociation> {
        self.edges.get_mut(&(source, target))
    }

    pub fn contains(&self, source: Id, target: Id) -> bool {
        self.edges.contains_key(&(source, target))
    }

    /// Returns the edge between two types regardless of which side created it.
    pub fn between(&self, x: Id, y: Id) -> Option<&MemberAssociation> {
        self.get(x, y).or_else(|| self.get(y, x))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates edges in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &MemberAssociation)> {
        self.edges.iter().map(|(key, edge)| (*key, edge))
    }

    fn insert(&mut self, key: EdgeKey, association: MemberAssociation) {
        self.edges.insert(key, association);
    }
}

/// Counts describing one graph build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    types: usize,
    duplicate_ids: usize,
    edges: usize,
    inherited: usize,
    emitted: usize,
}

impl BuildSummary {
    /// Declared types in the catalog.
    pub fn types(&self) -> usize {
        self.types
    }

    /// Type ids that were declared more than once.
    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }

    /// Edges in the working set after extraction.
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Edges flagged as inherited.
    pub fn inherited(&self) -> usize {
        self.inherited
    }

    /// Edges written into file outputs.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

/// Builds the relationship graph for `files` and stores each file's final
/// association list in place.
///
/// Any association lists already present on the files are replaced.
pub fn build_associations(files: &mut [FileDeclaration]) -> BuildSummary {
    info!(files = files.len(); "Building member associations");

    let (associations, created, mut summary) = {
        let catalog = TypeCatalog::build(files);

        let mut extractor = AssociationExtractor::new(&catalog);
        let created: Vec<Vec<EdgeKey>> = files
            .iter()
            .map(|file| extractor.extract_file(file))
            .collect();
        let mut associations = extractor.finish();
        debug!(edges = associations.len(); "Associations extracted");

        let inherited = inheritance::reconcile(&mut associations, &catalog);
        debug!(inherited; "Inherited associations flagged");

        let summary = BuildSummary {
            types: catalog.len(),
            duplicate_ids: catalog.duplicates().len(),
            edges: associations.len(),
            inherited,
            emitted: 0,
        };
        (associations, created, summary)
    };

    summary.emitted = finalize::finalize(files, &created, &associations);

    info!(
        types = summary.types,
        edges = summary.edges,
        inherited = summary.inherited,
        emitted = summary.emitted;
        "Member associations built"
    );
    summary
}
