//! umlgraph - Relationship graphs for UML class diagrams.
//!
//! Takes the declared types of a codebase (classes, interfaces, enums and
//! type aliases, with their members and heritage clauses) and produces, per
//! source file, a deduplicated list of relationship edges ready for a
//! diagram renderer:
//!
//! - reciprocal references collapse into one edge with a multiplicity per end;
//! - edges already present at a supertype are dropped from subtypes.

pub mod associations;
pub mod catalog;
pub mod config;

mod error;

pub use umlgraph_core::{association, declaration, identifier};

pub use associations::BuildSummary;
pub use error::GraphError;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use config::AppConfig;
use declaration::FileDeclaration;

/// The JSON document exchanged with the front end and the renderer.
#[derive(Deserialize)]
struct Document {
    files: Vec<FileDeclaration>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    files: &'a [FileDeclaration],
}

/// Builder for reading declarations and computing their relationship graph.
///
/// # Examples
///
/// ```rust
/// use umlgraph::{GraphBuilder, config::AppConfig};
///
/// let source = r#"{ "files": [ { "file_name": "src/zoo.ts", "types": [
///     { "kind": "Class", "id": "Zoo", "name": "Zoo", "properties": [
///         { "name": "animals", "declared_type": "Animal[]",
///           "referenced_type_ids": ["Animal"] } ] },
///     { "kind": "Class", "id": "Animal", "name": "Animal" }
/// ] } ] }"#;
///
/// let builder = GraphBuilder::new(AppConfig::default());
/// let mut files = builder.parse(source).expect("Failed to parse");
/// let summary = builder.build(&mut files);
///
/// assert_eq!(summary.emitted(), 1);
/// assert_eq!(files[0].member_associations()[0].b().name(), "Animal");
///
/// let json = builder.render_json(&files).expect("Failed to render");
/// assert!(json.contains("\"0..*\""));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a declarations document (`{ "files": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Input`] if the text is not a valid document.
    pub fn parse(&self, source: &str) -> Result<Vec<FileDeclaration>, GraphError> {
        info!("Parsing declarations");

        let document: Document =
            serde_json::from_str(source).map_err(|err| GraphError::new_input_error(err, source))?;

        debug!(files = document.files.len(); "Declarations parsed successfully");
        trace!(files:? = document.files; "Parsed declarations");

        Ok(document.files)
    }

    /// Compute every file's member associations in place.
    ///
    /// When associations are disabled in the configuration, every file's
    /// association list is cleared and an empty summary is returned.
    pub fn build(&self, files: &mut [FileDeclaration]) -> BuildSummary {
        if !self.config.associations().enabled() {
            info!("Member associations disabled, skipping");
            for file in files.iter_mut() {
                file.set_member_associations(Vec::new());
            }
            return BuildSummary::default();
        }

        associations::build_associations(files)
    }

    /// Serialize annotated files back into a declarations document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Output`] if serialization fails.
    pub fn render_json(&self, files: &[FileDeclaration]) -> Result<String, GraphError> {
        let document = DocumentRef { files };
        let json = if self.config.output().pretty() {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(GraphError::Output)?;

        info!(bytes = json.len(); "Declarations rendered");
        Ok(json)
    }
}
