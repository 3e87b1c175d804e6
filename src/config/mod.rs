
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::{Component, PathBuf};

/// Device label attached to every group when none is supplied
pub const DEFAULT_DEVICE: &str = "iPhone 15";

/// OS version label attached to every group when none is supplied
pub const DEFAULT_OS_VERSION: &str = "17.2";

/// File-name suffix that marks a spec file
pub const DEFAULT_SUFFIX: &str = ".e2e.ts";

/// Target device metadata, copied onto every emitted group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: String,
    pub os_version: String,
}

impl DeviceInfo {
    pub fn new(device: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            os_version: os_version.into(),
        }
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE, DEFAULT_OS_VERSION)
    }
}

/// Resolved settings for one run, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory that `search_path` is resolved against
    pub directory: PathBuf,
    /// Subdirectory to scan; also the prefix of every emitted spec path
    pub search_path: PathBuf,
    /// Upper bound on the number of groups
    pub parallelism: NonZeroUsize,
    /// File-name suffix to match
    pub suffix: String,
    pub device: DeviceInfo,
    /// Render indented JSON instead of a single line
    pub pretty: bool,
}

impl Config {
    /// Create a config with default paths, suffix and device info
    pub fn new(parallelism: NonZeroUsize) -> Self {
        Self {
            directory: PathBuf::new(),
            search_path: PathBuf::new(),
            parallelism,
            suffix: DEFAULT_SUFFIX.to_string(),
            device: DeviceInfo::default(),
            pretty: false,
        }
    }

    /// Set the base directory
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set the search path
    pub fn search_path(mut self, search_path: impl Into<PathBuf>) -> Self {
        self.search_path = search_path.into();
        self
    }

    /// Set the file-name suffix
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the device info
    pub fn device(mut self, device: DeviceInfo) -> Self {
        self.device = device;
        self
    }

    /// Directory the walk starts from
    ///
    /// The search path always resolves under `directory`, even when it is
    /// written with a leading `/`. Falls back to the current directory when
    /// both parts are empty.
    pub fn root(&self) -> PathBuf {
        let root = if self.directory.as_os_str().is_empty() {
            self.search_path.clone()
        } else {
            let relative: PathBuf = self
                .search_path
                .components()
                .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
                .collect();
            self.directory.join(relative)
        };

        if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root
        }
    }
}

/// Split e2e spec files into balanced CI matrix groups
///
/// Every option falls back to its environment variable, so the tool can
/// run as a bare CI step with no arguments beyond the environment.
#[derive(Debug, Parser)]
#[command(name = "spec-splitter", version, about)]
pub struct Args {
    /// Subdirectory of DIRECTORY to scan for spec files
    #[arg(long, env = "SEARCH_PATH")]
    pub search_path: Option<String>,

    /// Base directory to resolve SEARCH_PATH against
    #[arg(long, env = "DIRECTORY")]
    pub directory: Option<String>,

    /// Number of groups to split the specs into
    #[arg(long, env = "PARALLELISM", value_parser = parse_parallelism)]
    pub parallelism: NonZeroUsize,

    /// Device label attached to every group
    #[arg(long, env = "DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// OS version label attached to every group
    #[arg(long, env = "OS_VERSION", default_value = DEFAULT_OS_VERSION)]
    pub os_version: String,

    /// File-name suffix that marks a spec file
    #[arg(long, env = "SPEC_SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Pretty-print the JSON matrix
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Convert parsed arguments into a run config
    pub fn into_config(self) -> Config {
        Config {
            directory: PathBuf::from(self.directory.unwrap_or_default()),
            search_path: PathBuf::from(self.search_path.unwrap_or_default()),
            parallelism: self.parallelism,
            suffix: self.suffix,
            device: DeviceInfo::new(self.device, self.os_version),
            pretty: self.pretty,
        }
    }
}

fn parse_parallelism(raw: &str) -> Result<NonZeroUsize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a positive integer", raw))?;

    NonZeroUsize::new(value).ok_or_else(|| "parallelism must be at least 1".to_string())
}
