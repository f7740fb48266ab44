// src/section.rs

//! Locator for named `GlobalSection(...)` blocks.
//!
//! The legacy format brackets each global section between a
//! `GlobalSection(<Name>)` line and an `EndGlobalSection` line, and never
//! nests them, so a literal substring search for both markers is sufficient.
//! An absent marker means "no data recovered", not a parse error.

/// Byte bounds of a located section.
///
/// `start` points at the opening marker itself (not past it); `end` points at
/// the closing `EndGlobalSection` marker. Callers iterating the interior skip
/// the opening marker's own line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

/// Find the bounds of `GlobalSection(<name>)` ... `EndGlobalSection`.
pub fn find_global_section(content: &str, name: &str) -> Option<SectionBounds> {
    let opening = format!("GlobalSection({name})");
    let start = content.find(&opening)?;
    let end = content[start..].find("EndGlobalSection")? + start;
    Some(SectionBounds { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Global\n\
        \tGlobalSection(SolutionConfigurationPlatforms) = preSolution\n\
        \t\tDebug|x64 = Debug|x64\n\
        \tEndGlobalSection\n\
        EndGlobal\n";

    #[test]
    fn test_find_section() {
        let bounds = find_global_section(DOC, "SolutionConfigurationPlatforms").unwrap();
        assert!(DOC[bounds.start..].starts_with("GlobalSection(SolutionConfigurationPlatforms)"));
        assert!(DOC[bounds.end..].starts_with("EndGlobalSection"));
        assert!(DOC[bounds.start..bounds.end].contains("Debug|x64"));
    }

    #[test]
    fn test_missing_section_name() {
        assert_eq!(find_global_section(DOC, "NestedProjects"), None);
    }

    #[test]
    fn test_missing_end_marker() {
        let truncated = "GlobalSection(SolutionConfigurationPlatforms) = preSolution\n";
        assert_eq!(
            find_global_section(truncated, "SolutionConfigurationPlatforms"),
            None
        );
    }
}
