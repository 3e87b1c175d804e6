mod group;


pub use group::SpecGroup;

use crate::config::DeviceInfo;
use std::num::NonZeroUsize;

/// Number of files per group for the given file count
///
/// Never returns zero, so it is always safe to slice with.
pub fn chunk_size(file_count: usize, parallelism: NonZeroUsize) -> usize {
    file_count.div_ceil(parallelism.get()).max(1)
}

/// Split files into at most `parallelism` contiguous groups
///
/// Groups preserve input order and every file lands in exactly one group.
/// An empty file list still yields a single group with empty `specs`, so
/// the downstream matrix always has at least one entry.
pub fn split(
    files: &[String],
    parallelism: NonZeroUsize,
    device_info: &DeviceInfo,
) -> Vec<SpecGroup> {
    if files.is_empty() {
        tracing::warn!("no spec files found, emitting a single empty group");
        return vec![SpecGroup::new(1, String::new(), device_info)];
    }

    let size = chunk_size(files.len(), parallelism);
    let groups: Vec<SpecGroup> = files
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| SpecGroup::new(i + 1, chunk.join(" "), device_info))
        .collect();

    tracing::info!(
        files = files.len(),
        chunk_size = size,
        groups = groups.len(),
        parallelism = parallelism.get(),
        "split spec files"
    );

    groups
}
