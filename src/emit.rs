// src/emit.rs

//! Serialization of the recovered model into `.slnx` XML.
//!
//! The target vocabulary is small enough to shape by hand; attribute values
//! go through `quick_xml`'s escaping so the five reserved characters are
//! rewritten to named references. Line endings are CRLF throughout: that is
//! the target format's convention, independent of the host platform.

use quick_xml::escape::escape;

use crate::solution::{ConfigurationInfo, ProjectEntry};

/// Build types that the target format treats as implicit defaults.
const DEFAULT_BUILD_TYPES: [&str; 2] = ["Debug", "Release"];

/// Serialize the recovered model into the output document.
///
/// An empty model (no platforms, no projects) collapses to the minimal
/// self-closing root. Build-type elements are written only when the set
/// contains a name outside the conventional defaults; the target format has
/// no implicit-default mechanism of its own, so any deviation forces the
/// whole set out explicitly, defaults included.
pub fn emit_slnx(config: &ConfigurationInfo, projects: &[ProjectEntry]) -> String {
    if config.platforms.is_empty() && projects.is_empty() {
        return "<Solution />\r\n".to_string();
    }

    let mut xml = String::with_capacity(1024);
    xml.push_str("<Solution>\r\n  <Configurations>\r\n");

    let has_non_default_build_type = config
        .build_types
        .iter()
        .any(|bt| !DEFAULT_BUILD_TYPES.contains(&bt.as_str()));

    if has_non_default_build_type {
        for build_type in &config.build_types {
            xml.push_str("    <BuildType Name=\"");
            xml.push_str(&escape(build_type));
            xml.push_str("\" />\r\n");
        }
    }

    for platform in &config.platforms {
        xml.push_str("    <Platform Name=\"");
        xml.push_str(&escape(platform));
        xml.push_str("\" />\r\n");
    }
    xml.push_str("  </Configurations>\r\n");

    for project in projects {
        xml.push_str("  <Project Path=\"");
        xml.push_str(&escape(&project.path));
        xml.push('"');
        if !project.id.is_empty() {
            xml.push_str(" Id=\"");
            xml.push_str(&escape(&project.id));
            xml.push('"');
        }
        xml.push_str(" />\r\n");
    }

    xml.push_str("</Solution>\r\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::escape::unescape;

    fn config(build_types: &[&str], platforms: &[&str]) -> ConfigurationInfo {
        ConfigurationInfo {
            build_types: build_types.iter().map(|s| s.to_string()).collect(),
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn project(path: &str, id: &str) -> ProjectEntry {
        ProjectEntry {
            path: path.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_empty_solution() {
        let xml = emit_slnx(&ConfigurationInfo::default(), &[]);
        assert_eq!(xml, "<Solution />\r\n");
    }

    #[test]
    fn test_default_build_types_implicit() {
        let xml = emit_slnx(&config(&["Debug", "Release"], &["x64", "x86"]), &[]);
        assert!(!xml.contains("<BuildType"));
        assert_eq!(
            xml,
            "<Solution>\r\n  <Configurations>\r\n    <Platform Name=\"x64\" />\r\n    <Platform Name=\"x86\" />\r\n  </Configurations>\r\n</Solution>\r\n"
        );
    }

    #[test]
    fn test_non_default_build_type_forces_full_set() {
        let xml = emit_slnx(&config(&["Debug", "Release", "Profile"], &["x64"]), &[]);
        assert!(xml.contains("<BuildType Name=\"Debug\" />"));
        assert!(xml.contains("<BuildType Name=\"Profile\" />"));
        assert!(xml.contains("<BuildType Name=\"Release\" />"));
        // Lexicographic set order
        let debug = xml.find("\"Debug\"").unwrap();
        let profile = xml.find("\"Profile\"").unwrap();
        let release = xml.find("\"Release\"").unwrap();
        assert!(debug < profile && profile < release);
    }

    #[test]
    fn test_projects_in_declaration_order() {
        let projects = vec![
            project("zebra/Zebra.csproj", "bbb"),
            project("alpha/Alpha.csproj", "aaa"),
        ];
        let xml = emit_slnx(&ConfigurationInfo::default(), &projects);
        let zebra = xml.find("zebra/Zebra.csproj").unwrap();
        let alpha = xml.find("alpha/Alpha.csproj").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn test_empty_id_omitted() {
        let xml = emit_slnx(&ConfigurationInfo::default(), &[project("App.csproj", "")]);
        assert!(xml.contains("<Project Path=\"App.csproj\" />"));
        assert!(!xml.contains("Id="));
    }

    #[test]
    fn test_attribute_escaping_round_trips() {
        let ugly = "a&b<c>d\"e'f";
        let xml = emit_slnx(&ConfigurationInfo::default(), &[project(ugly, "")]);
        assert!(xml.contains("a&amp;b&lt;c&gt;d&quot;e&apos;f"));

        let start = xml.find("Path=\"").unwrap() + 6;
        let end = xml[start..].find('"').unwrap() + start;
        assert_eq!(unescape(&xml[start..end]).unwrap(), ugly);
    }

    #[test]
    fn test_crlf_line_endings_only() {
        let xml = emit_slnx(&config(&["Debug"], &["x64"]), &[project("App.csproj", "abc")]);
        for line in xml.split_inclusive('\n') {
            assert!(line.ends_with("\r\n"), "line missing CRLF: {line:?}");
        }
    }

    #[test]
    fn test_projects_without_configurations() {
        // A platform-less solution with projects still gets the
        // Configurations block, just with nothing in it.
        let xml = emit_slnx(&ConfigurationInfo::default(), &[project("App.csproj", "abc")]);
        assert!(xml.starts_with("<Solution>\r\n  <Configurations>\r\n  </Configurations>\r\n"));
        assert!(xml.contains("<Project Path=\"App.csproj\" Id=\"abc\" />"));
    }
}
