// src/lib.rs

//! sln2slnx
//!
//! Best-effort converter from the legacy line-oriented Visual Studio
//! solution format (`.sln`) to the XML-based replacement (`.slnx`).
//!
//! # Architecture
//!
//! - One-way data flow: raw bytes → line scanner → two independent
//!   extractors → recovered model → XML emitter → output bytes
//! - Degraded-mode parsing: malformed input tarnishes the outcome instead
//!   of aborting it; the unit of failure isolation is one input file
//! - No cross-file state: the recovered model is built fresh per input
//!   and discarded after the output is written

pub mod convert;
pub mod emit;
mod error;
pub mod scan;
pub mod section;
pub mod solution;

pub use convert::{BatchSummary, Conversion, collect_targets, convert_all, convert_file};
pub use emit::emit_slnx;
pub use error::{Error, Result};
pub use section::{SectionBounds, find_global_section};
pub use solution::{ConfigurationInfo, LineKind, ParseOutcome, ProjectEntry, parse_solution};
