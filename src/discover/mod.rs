mod error;


pub use error::DiscoverError;

use crate::config::Config;
use crate::paths::{has_suffix, join_spec_path};
use std::path::Path;
use walkdir::WalkDir;

/// Collect every spec file under the configured search root
///
/// Each returned path is the search path joined with the file's path
/// relative to the root. The list is sorted so that chunk assignment is
/// reproducible regardless of how the platform orders directory entries.
pub fn discover(config: &Config) -> Result<Vec<String>, DiscoverError> {
    let root = config.root();
    discover_in(&root, &config.search_path, &config.suffix)
}

/// Walk `root` and collect files whose name ends with `suffix`
pub fn discover_in(
    root: &Path,
    search_path: &Path,
    suffix: &str,
) -> Result<Vec<String>, DiscoverError> {
    tracing::debug!(root = %root.display(), suffix, "scanning for spec files");

    if !root.is_dir() {
        return Err(DiscoverError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|source| DiscoverError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        // Directories named like specs don't count
        if !entry.file_type().is_file() || !has_suffix(entry.path(), suffix) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let spec_path = join_spec_path(search_path, relative)?;

        // Groups are space-joined, so a path with whitespace would mis-split
        if spec_path.chars().any(char::is_whitespace) {
            return Err(DiscoverError::WhitespaceInPath(spec_path));
        }

        tracing::debug!(spec = %spec_path, "found spec file");
        files.push(spec_path);
    }

    files.sort();

    tracing::info!(count = files.len(), root = %root.display(), "discovered spec files");
    Ok(files)
}
