//! Per-file metadata shown next to plain files
//!
//! Metadata is never stored in the tree. The renderer fetches it through the
//! node's path at print time, so it reflects the file as it is when printed.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// `asctime`-style layout, e.g. `Tue Nov 14 22:13:20 2023`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size in bytes
    pub size: u64,
    pub modified: SystemTime,
}

impl FileMetadata {
    /// Modification time converted to the local timezone.
    pub fn modified_local(&self) -> DateTime<Local> {
        DateTime::<Local>::from(self.modified)
    }

    /// The text appended after a file's name: `SIZE -> n bytes, LAST MODIFIED -> time`.
    pub fn summary(&self) -> String {
        format!(
            "SIZE -> {} bytes, LAST MODIFIED -> {}",
            self.size,
            self.modified_local().format(TIMESTAMP_FORMAT)
        )
    }
}

/// Format a timestamp in local time using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
