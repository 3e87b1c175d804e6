// Public API exports
pub mod config;
pub mod discover;
pub mod matrix;
pub mod paths;
pub mod pipeline;
pub mod splitter;

// Re-export main types for convenience
pub use config::{Args, Config, DeviceInfo, DEFAULT_DEVICE, DEFAULT_OS_VERSION, DEFAULT_SUFFIX};
pub use discover::{discover, DiscoverError};
pub use matrix::{Matrix, MatrixError};
pub use splitter::{chunk_size, split, SpecGroup};
