use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Search root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Spec path contains whitespace and cannot be space-joined: {0}")]
    WhitespaceInPath(String),
}
