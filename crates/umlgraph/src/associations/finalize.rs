//! Per-file finalization.

use log::trace;

use umlgraph_core::declaration::FileDeclaration;

use super::{AssociationSet, EdgeKey};

/// Writes each file's surviving edges into the file, in creation order.
///
/// `created[i]` holds the keys of the edges created while extracting
/// `files[i]`. Edges flagged inherited are left out of the file output but
/// stay in `associations`. Returns the total number of edges written.
pub fn finalize(
    files: &mut [FileDeclaration],
    created: &[Vec<EdgeKey>],
    associations: &AssociationSet,
) -> usize {
    let mut emitted = 0;

    for (file, keys) in files.iter_mut().zip(created) {
        let kept: Vec<_> = keys
            .iter()
            .filter_map(|&(source, target)| associations.get(source, target))
            .filter(|association| !association.is_inherited())
            .cloned()
            .collect();

        trace!(
            file = file.file_name(),
            kept = kept.len(),
            dropped = keys.len() - kept.len();
            "File associations finalized"
        );
        emitted += kept.len();
        file.set_member_associations(kept);
    }

    emitted
}
