// src/solution.rs

//! Extraction of the recovered solution model from legacy `.sln` text.
//!
//! Two independent linear scans produce the model: the configuration
//! extractor walks the interior of the `SolutionConfigurationPlatforms`
//! global section, and the project extractor walks the whole document for
//! `Project(...)` declaration lines. Neither scan ever fails outright;
//! anything malformed is dropped and recorded on the tarnished flag so the
//! conversion can proceed in degraded mode.

use std::collections::BTreeSet;

use crate::scan::Lines;
use crate::section::find_global_section;

/// Opening substring of the mandatory format-version preamble line.
const FORMAT_PREAMBLE: &str = "Microsoft Visual Studio Solution File, Format Version";

/// Name of the one global section this converter consumes.
const CONFIGURATION_SECTION: &str = "SolutionConfigurationPlatforms";

/// Distinct build types and platforms recovered from the configuration
/// section.
///
/// Both containers are sorted sets: insertion order in the source file is
/// irrelevant, and the emitter relies on deterministic lexicographic
/// iteration. Neither set ever contains an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationInfo {
    pub build_types: BTreeSet<String>,
    pub platforms: BTreeSet<String>,
}

impl ConfigurationInfo {
    pub fn is_empty(&self) -> bool {
        self.build_types.is_empty() && self.platforms.is_empty()
    }
}

/// One member project reference, in file-declaration order.
///
/// `path` is slash-normalized; `id` is lowercase with enclosing braces
/// stripped, and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub path: String,
    pub id: String,
}

/// Everything recovered from one input document.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub configurations: ConfigurationInfo,
    pub projects: Vec<ProjectEntry>,
    /// Set when the format-version preamble was absent or a project
    /// declaration line was malformed. Advisory only: extraction still ran
    /// to completion in degraded mode.
    pub tarnished: bool,
}

/// Classification of one trimmed line of the legacy vocabulary.
///
/// Only [`LineKind::Project`] carries data this converter needs; the rest
/// are recognized so they can be skipped deliberately rather than falling
/// through as surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Project,
    ProjectSection,
    EndProjectSection,
    EndProject,
    Global,
    GlobalSection,
    EndGlobalSection,
    EndGlobal,
    VisualStudioVersion,
    MinimumVisualStudioVersion,
    Comment,
    Blank,
    Property,
}

impl LineKind {
    /// Classify a raw line. Leading and trailing whitespace is ignored.
    pub fn of(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if trimmed.starts_with('#') {
            return LineKind::Comment;
        }
        match trimmed {
            "Global" => return LineKind::Global,
            "EndGlobal" => return LineKind::EndGlobal,
            "EndProject" => return LineKind::EndProject,
            "EndProjectSection" => return LineKind::EndProjectSection,
            "EndGlobalSection" => return LineKind::EndGlobalSection,
            _ => {}
        }
        if trimmed.starts_with("Project(") {
            LineKind::Project
        } else if trimmed.starts_with("ProjectSection(") {
            LineKind::ProjectSection
        } else if trimmed.starts_with("GlobalSection(") {
            LineKind::GlobalSection
        } else if trimmed.starts_with("MinimumVisualStudioVersion") {
            LineKind::MinimumVisualStudioVersion
        } else if trimmed.starts_with("VisualStudioVersion") {
            LineKind::VisualStudioVersion
        } else {
            LineKind::Property
        }
    }
}

/// Parse one input document into the recovered model.
///
/// This is the single extraction entry point: both scans run over the same
/// immutable text, and the tarnished flag aggregates the preamble check with
/// any dropped project lines.
pub fn parse_solution(content: &str) -> ParseOutcome {
    let mut tarnished = !has_format_preamble(content);

    let configurations = extract_configurations(content);
    let (projects, dropped_lines) = extract_projects(content);
    if dropped_lines {
        tarnished = true;
    }

    ParseOutcome {
        configurations,
        projects,
        tarnished,
    }
}

/// Check that the first non-blank line is the format-version preamble.
fn has_format_preamble(content: &str) -> bool {
    for line in Lines::new(content) {
        if line.trim().is_empty() {
            continue;
        }
        return line.contains(FORMAT_PREAMBLE);
    }
    false
}

/// Collect build types and platforms from the configuration-platforms
/// section. A missing section or a section with no well-formed lines yields
/// empty sets.
pub fn extract_configurations(content: &str) -> ConfigurationInfo {
    let mut info = ConfigurationInfo::default();

    let Some(bounds) = find_global_section(content, CONFIGURATION_SECTION) else {
        return info;
    };

    let mut lines = Lines::starting_at(content, bounds.start);
    // The first line is the GlobalSection marker itself.
    lines.next();

    while lines.offset() < bounds.end {
        let Some(line) = lines.next() else {
            break;
        };
        if LineKind::of(line) == LineKind::EndGlobalSection {
            break;
        }
        process_configuration_line(line, &mut info);
    }

    info
}

/// Handle one line of the configuration section.
///
/// A valid line has the shape `<BuildType>|<Platform> = <BuildType>|<Platform>`.
/// Lines missing either delimiter are tolerated and skipped.
fn process_configuration_line(line: &str, info: &mut ConfigurationInfo) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return;
    }

    let Some(pipe) = trimmed.find('|') else {
        return;
    };
    let Some(eq) = trimmed[pipe..].find('=').map(|p| pipe + p) else {
        return;
    };

    let build_type = trimmed[..pipe].trim();
    if !build_type.is_empty() {
        info.build_types.insert(build_type.to_string());
    }

    let mut platform = trimmed[pipe + 1..eq].trim();
    // slnx spells the 32-bit platform "x86" where sln wrote "Win32".
    if platform == "Win32" {
        platform = "x86";
    }
    if !platform.is_empty() {
        info.platforms.insert(platform.to_string());
    }
}

/// Scan the whole document for project declarations, in declaration order.
///
/// Returns the entries plus a flag that is true when at least one
/// `Project(` line was malformed and dropped.
pub fn extract_projects(content: &str) -> (Vec<ProjectEntry>, bool) {
    let mut projects = Vec::new();
    let mut dropped = false;

    for line in Lines::new(content) {
        if LineKind::of(line) != LineKind::Project {
            continue;
        }
        match parse_project_line(line) {
            Some(entry) => projects.push(entry),
            None => dropped = true,
        }
    }

    (projects, dropped)
}

/// Tokenize one `Project(...)` line into its quoted fields and build an
/// entry from fields three (path) and four (id).
///
/// The legacy shape is
/// `Project("{type-guid}") = "name", "path", "{project-guid}"`:
/// four quote-delimited fields. A line with fewer than four complete quote
/// pairs is malformed and yields `None` rather than a partial entry.
fn parse_project_line(line: &str) -> Option<ProjectEntry> {
    let mut fields = quoted_fields(line);
    let _type_guid = fields.next()?;
    let _name = fields.next()?;
    let path = fields.next()?;
    let id = fields.next()?;

    Some(ProjectEntry {
        path: normalize_path(path),
        id: normalize_id(id),
    })
}

/// Iterate the contents of complete `"..."` pairs, left to right.
/// An unpaired trailing quote terminates the iteration.
fn quoted_fields(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let open = rest.find('"')?;
        let after_open = &rest[open + 1..];
        let close = after_open.find('"')?;
        let field = &after_open[..close];
        rest = &after_open[close + 1..];
        Some(field)
    })
}

/// sln stores project ids uppercase and brace-wrapped; slnx wants them bare
/// and lowercase.
fn normalize_id(id: &str) -> String {
    let id = id.strip_prefix('{').unwrap_or(id);
    let id = id.strip_suffix('}').unwrap_or(id);
    id.to_lowercase()
}

/// sln uses backslash as the path separator; slnx requires forward slash.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
