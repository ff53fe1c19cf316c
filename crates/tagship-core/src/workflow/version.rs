//! Version workflow operations

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use toml_edit::{value, DocumentMut};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{Result, VersionError};

/// Matches a `__version__ = '...'` assignment with either quote style
static VERSION_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(?P<lhs>[ \t]*__version__[ \t]*=[ \t]*)(?:'(?P<single>[^'\n]*)'|"(?P<double>[^"\n]*)")"#)
        .expect("Invalid regex")
});

/// Format a version tag based on the configuration
pub fn format_tag(config: &Config, version: &str) -> String {
    config.git.tag_format.replace("{version}", version)
}

/// Render a message template containing a `{version}` placeholder
pub fn render_message(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// Check that a version string is usable as a release version.
///
/// Python versions are not semver (`1.0.0.post1`, `2.0rc1`), so only the
/// shape is checked: non-empty, starting with a digit, no whitespace.
pub fn validate_version(version: &str) -> Result<()> {
    let trimmed = version.trim();
    if trimmed.is_empty()
        || !trimmed.starts_with(|c: char| c.is_ascii_digit())
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(VersionError::InvalidFormat(version.to_string()).into());
    }
    Ok(())
}

/// Write `version` into a file that carries the package version.
///
/// `pyproject.toml` gets `project.version` set with formatting preserved; any
/// other file gets its first `__version__ = '...'` assignment rewritten.
/// Returns whether the file content changed.
#[instrument(fields(path = %path.display(), version))]
pub fn stamp_version(path: &Path, version: &str) -> Result<bool> {
    let content = std::fs::read_to_string(path)?;

    let updated = if path.file_name().is_some_and(|n| n == "pyproject.toml") {
        stamp_pyproject(path, &content, version)?
    } else {
        stamp_assignment(path, &content, version)?
    };

    if updated == content {
        debug!(path = %path.display(), "version already up to date");
        return Ok(false);
    }

    std::fs::write(path, updated)?;
    info!(path = %path.display(), version, "stamped version");
    Ok(true)
}

fn stamp_pyproject(path: &Path, content: &str, version: &str) -> Result<String> {
    let mut doc: DocumentMut =
        content
            .parse()
            .map_err(|e: toml_edit::TomlError| VersionError::ManifestParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

    let project = doc
        .get_mut("project")
        .and_then(|p| p.as_table_mut())
        .ok_or_else(|| VersionError::MarkerNotFound(path.to_path_buf()))?;

    if project.get("version").and_then(|v| v.as_str()) == Some(version) {
        return Ok(content.to_string());
    }
    project["version"] = value(version);

    Ok(doc.to_string())
}

fn stamp_assignment(path: &Path, content: &str, version: &str) -> Result<String> {
    if !VERSION_ASSIGNMENT.is_match(content) {
        return Err(VersionError::MarkerNotFound(path.to_path_buf()).into());
    }

    let updated = VERSION_ASSIGNMENT.replace(content, |caps: &Captures<'_>| {
        let quote = if caps.name("single").is_some() { '\'' } else { '"' };
        format!("{}{quote}{version}{quote}", &caps["lhs"])
    });

    Ok(updated.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_tag() {
        let config = Config::default();
        assert_eq!(format_tag(&config, "1.0.0"), "v1.0.0");
    }

    #[test]
    fn test_render_message() {
        assert_eq!(render_message("Release {version}", "0.4.1"), "Release 0.4.1");
    }

    #[test]
    fn test_validate_version() {
        assert!(validate_version("1.0.0").is_ok());
        assert!(validate_version("2.0rc1").is_ok());
        assert!(validate_version("1.0.0.dev0").is_ok());
        assert!(validate_version("").is_err());
        assert!(validate_version("v1.0.0").is_err());
        assert!(validate_version("1.0 beta").is_err());
    }

    #[test]
    fn test_stamp_python_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("numeral.py");
        std::fs::write(
            &path,
            "# -*- coding: utf-8 -*-\n__version__ = '0.0.0.dev0'\n\ndef main():\n    pass\n",
        )
        .unwrap();

        assert!(stamp_version(&path, "1.2.3").unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("__version__ = '1.2.3'"));
        assert!(content.contains("def main():"));

        // Second stamp with the same version is a no-op
        assert!(!stamp_version(&path, "1.2.3").unwrap());
    }

    #[test]
    fn test_stamp_keeps_double_quotes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("_version.py");
        std::fs::write(&path, "__version__ = \"0.1\"\n").unwrap();

        stamp_version(&path, "0.2").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "__version__ = \"0.2\"\n");
    }

    #[test]
    fn test_stamp_missing_marker() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module.py");
        std::fs::write(&path, "VERSION = 1\n").unwrap();

        let err = stamp_version(&path, "1.0.0").unwrap_err();
        assert!(matches!(
            err,
            crate::error::TagshipError::Version(VersionError::MarkerNotFound(_))
        ));
    }

    #[test]
    fn test_stamp_pyproject() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(
            &path,
            "[project]\nname = \"numeral\"\nversion = \"1.0.0\"  # bumped by release\n",
        )
        .unwrap();

        assert!(stamp_version(&path, "1.1.0").unwrap());

        let doc: DocumentMut = std::fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(doc["project"]["version"].as_str(), Some("1.1.0"));
        assert_eq!(doc["project"]["name"].as_str(), Some("numeral"));
    }

    #[test]
    fn test_stamp_pyproject_without_project_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(&path, "[tool.black]\nline-length = 88\n").unwrap();

        assert!(stamp_version(&path, "1.0.0").is_err());
    }
}
