use crate::config::DeviceInfo;
use serde::{Deserialize, Serialize};

/// One CI run: a contiguous slice of spec files plus device metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecGroup {
    /// 1-based position of the group, as a decimal string
    pub run_id: String,
    /// Space-separated spec paths
    pub specs: String,
    pub device: String,
    pub os_version: String,
}

impl SpecGroup {
    pub fn new(run_no: usize, specs: String, device_info: &DeviceInfo) -> Self {
        Self {
            run_id: run_no.to_string(),
            specs,
            device: device_info.device.clone(),
            os_version: device_info.os_version.clone(),
        }
    }

    /// Iterate over the spec paths in this group
    pub fn spec_paths(&self) -> impl Iterator<Item = &str> {
        self.specs.split_whitespace()
    }
}
