// src/convert.rs

//! Conversion driver: working-set collection and per-file conversion.
//!
//! The batch contract is isolation: one unreadable or unwritable file is
//! reported and skipped, everything else proceeds. Diagnostics go through
//! `tracing` so the primary output stream stays clean.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::emit::emit_slnx;
use crate::error::{Error, Result};
use crate::solution::parse_solution;

/// Extension of the legacy input format, matched case-insensitively.
const INPUT_EXTENSION: &str = "sln";

/// Extension written next to each converted input.
const OUTPUT_EXTENSION: &str = "slnx";

/// Result of one successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// Path of the written output file.
    pub output: PathBuf,
    /// True when the input did not fully conform to the expected format and
    /// extraction ran in degraded mode.
    pub tarnished: bool,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    pub tarnished: usize,
}

/// Whether a path names a legacy solution file.
pub fn is_target_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Collect the distinct solution files under the given roots.
///
/// Files are matched by extension, directories are walked recursively, and
/// the result is an ordered, deduplicated working set so repeated or
/// overlapping roots convert each file once, in a stable order. A
/// nonexistent root is reported and skipped.
pub fn collect_targets(roots: &[PathBuf]) -> BTreeSet<PathBuf> {
    let mut targets = BTreeSet::new();

    for root in roots {
        if !root.exists() {
            warn!("{} doesn't exist", root.display());
            continue;
        }

        if root.is_dir() {
            for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
                if !entry.file_type().is_file() {
                    continue;
                }
                if is_target_file(entry.path()) {
                    targets.insert(entry.into_path());
                } else {
                    debug!("skipping {}", entry.path().display());
                }
            }
        } else if is_target_file(root) {
            targets.insert(root.clone());
        } else {
            debug!("skipping {}", root.display());
        }
    }

    targets
}

/// Convert one solution file, writing the output next to the input with the
/// extension swapped.
pub fn convert_file(path: &Path) -> Result<Conversion> {
    let bytes = fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    // The legacy format is nominally UTF-8; decode lossily so a stray byte
    // degrades to U+FFFD instead of failing the file.
    let content = String::from_utf8_lossy(&bytes);

    let outcome = parse_solution(&content);
    let slnx = emit_slnx(&outcome.configurations, &outcome.projects);

    let output = path.with_extension(OUTPUT_EXTENSION);
    fs::write(&output, slnx).map_err(|source| Error::WriteOutput {
        path: output.clone(),
        source,
    })?;

    Ok(Conversion {
        output,
        tarnished: outcome.tarnished,
    })
}

/// Convert every file in the working set, isolating failures per file.
pub fn convert_all<'a, I>(files: I) -> BatchSummary
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let mut summary = BatchSummary::default();

    for path in files {
        info!("converting {}", path.display());
        match convert_file(path) {
            Ok(conversion) => {
                if conversion.tarnished {
                    // One warning per file, however many lines were bad.
                    warn!("{}: input may have formatting issues", path.display());
                    summary.tarnished += 1;
                }
                info!("wrote {}", conversion.output.display());
                summary.converted += 1;
            }
            Err(e) => {
                warn!("{e}");
                summary.failed += 1;
            }
        }
    }

    summary
}
