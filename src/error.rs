// src/error.rs

//! Error types for the converter library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can fail a single file's conversion.
///
/// Everything beneath this level (missing sections, malformed project lines,
/// an absent format preamble) is degraded-mode parsing, not an error: the
/// parser records it on [`crate::solution::ParseOutcome::tarnished`] and
/// keeps going. The unit of failure isolation is one input file, so none of
/// these variants ever aborts a batch.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
