//! Changelog file operations

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChangelogError, Result};

/// Write changelog content to `path`, prepending to any existing content
pub fn write_changelog(path: &Path, content: &str, prepend: bool) -> Result<()> {
    info!(path = %path.display(), prepend, "writing changelog");

    let combined = match read_changelog(path)? {
        Some(existing) if prepend => format!("{}\n{}", content.trim_end(), existing),
        _ => content.to_string(),
    };

    std::fs::write(path, combined).map_err(|e| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Read existing changelog content
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(
            std::fs::read_to_string(path).map_err(ChangelogError::Io)?,
        ))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}
