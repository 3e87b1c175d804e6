
use crate::discover::DiscoverError;
use std::path::{Component, Path};

/// Join a search path and a walk-relative path into a spec path
///
/// The result always uses forward slashes so the emitted matrix is the same
/// on every platform. `.` components are dropped; `..` and a leading root
/// are kept.
pub fn join_spec_path(search_path: &Path, relative: &Path) -> Result<String, DiscoverError> {
    let mut parts: Vec<&str> = Vec::new();
    let mut absolute = false;

    for component in search_path.components().chain(relative.components()) {
        match component {
            Component::Prefix(prefix) => {
                let part = prefix
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| DiscoverError::NonUtf8Path(search_path.to_path_buf()))?;
                parts.push(part);
            }
            Component::RootDir => absolute = true,
            Component::CurDir => continue,
            Component::ParentDir => parts.push(".."),
            Component::Normal(part) => {
                let part_str = part
                    .to_str()
                    .ok_or_else(|| DiscoverError::NonUtf8Path(search_path.join(relative)))?;
                parts.push(part_str);
            }
        }
    }

    let joined = parts.join("/");
    if absolute {
        Ok(format!("/{}", joined))
    } else {
        Ok(joined)
    }
}

/// Check whether the final component of `path` ends with `suffix`
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(suffix))
        .unwrap_or(false)
}
