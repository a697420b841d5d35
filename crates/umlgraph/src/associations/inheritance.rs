//! Inheritance reconciliation.
//!
//! An edge `(src, dst)` is redundant when some ancestor of `src` (a direct or
//! transitive `extends`/`implements` target) already has an edge keyed
//! `(ancestor, dst)`. Such edges are flagged inherited so the diagram shows
//! the relationship once, at the most general type that declares it.
//!
//! Heritage targets missing from the catalog end the walk along that path.
//! Heritage cycles are malformed input; a visited set per checked edge keeps
//! the walk finite, and also avoids revisiting diamond-shaped hierarchies.

use std::collections::HashSet;

use log::{debug, trace};

use umlgraph_core::identifier::Id;

use super::AssociationSet;
use crate::catalog::TypeCatalog;

/// Flags every edge whose relationship an ancestor already carries.
///
/// Returns the number of edges newly flagged.
pub fn reconcile(associations: &mut AssociationSet, catalog: &TypeCatalog) -> usize {
    let redundant: Vec<usize> = associations
        .iter()
        .enumerate()
        .filter(|(_, ((source, target), _))| {
            let mut visited = HashSet::from([*source]);
            inherited_from_ancestor(*source, *target, associations, catalog, &mut visited)
        })
        .map(|(index, _)| index)
        .collect();

    let mut flagged = 0;
    for index in redundant {
        if let Some((_, association)) = associations.edges.get_index_mut(index) {
            if !association.is_inherited() {
                association.mark_inherited();
                flagged += 1;
            }
        }
    }
    flagged
}

/// Returns `true` if an ancestor of `source` has an edge to `target`.
fn inherited_from_ancestor(
    source: Id,
    target: Id,
    associations: &AssociationSet,
    catalog: &TypeCatalog,
    visited: &mut HashSet<Id>,
) -> bool {
    let Some(entity) = catalog.get(source) else {
        return false;
    };

    for clause in entity.heritage_clauses() {
        let ancestor = clause.target_id();
        if !catalog.contains(ancestor) {
            debug!(
                source:% = source,
                ancestor = clause.target_name();
                "Heritage target not in catalog, skipping"
            );
            continue;
        }
        if !visited.insert(ancestor) {
            continue;
        }

        if associations.contains(ancestor, target) {
            trace!(
                ancestor:% = ancestor,
                target:% = target;
                "Association already present at ancestor"
            );
            return true;
        }
        if inherited_from_ancestor(ancestor, target, associations, catalog, visited) {
            return true;
        }
    }

    false
}
