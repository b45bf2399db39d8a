use std::fs::File;
use std::fs::OpenOptions;
use std::path::Path;

use crate::Error;
use crate::Result;

/// Opens `path` for appending, creating the file and its parent
/// directories if needed.
pub fn open_file_for_append<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::Fatal(format!("failed to create {}: {}", parent.display(), e)))?;
    }

    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::Fatal(format!("failed to open {}: {}", path.display(), e)))
}
