//! CLI logic for the umlgraph tool.
//!
//! Reads a declarations document, builds its relationship graph and writes
//! the annotated document for the renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use umlgraph::{GraphBuilder, GraphError};

/// Run the umlgraph CLI application
///
/// # Errors
///
/// Returns `GraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed declarations documents
/// - Serialization errors
pub fn run(args: &Args) -> Result<(), GraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing declarations"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = GraphBuilder::new(app_config);
    let mut files = builder.parse(&source)?;
    let summary = builder.build(&mut files);
    let json = builder.render_json(&files)?;

    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        associations = summary.emitted();
        "Relationship graph exported successfully"
    );

    Ok(())
}
