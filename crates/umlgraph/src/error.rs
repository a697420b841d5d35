//! Error types for umlgraph operations.
//!
//! This module provides the main error type [`GraphError`]. Building the
//! relationship graph itself never fails: unresolved references and
//! unmodeled base types degrade to "no edge". Errors only come from reading
//! and writing declaration documents.

use std::io;

use thiserror::Error;

/// The main error type for umlgraph operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the document text next to the JSON error so a
/// reporter can point at the offending line and column.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid declarations document: {err}")]
    Input { err: serde_json::Error, src: String },

    #[error("Output error: {0}")]
    Output(serde_json::Error),
}

impl GraphError {
    /// Create a new `Input` error with the associated document text.
    pub fn new_input_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}
