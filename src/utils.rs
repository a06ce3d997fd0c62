use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Locate the per-user project directories
///
/// Nothing is created on disk here; callers that write into the
/// configuration directory create it when they first save.
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// The per-user configuration directory
pub fn config_dir() -> Result<PathBuf> {
    Ok(find_project_folder()?.config_dir().to_path_buf())
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_is_hidden_file() {
        assert!(is_hidden_file(Path::new("/tmp/.hidden")));
        assert!(!is_hidden_file(Path::new("/tmp/visible.txt")));
    }
}
