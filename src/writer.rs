//! Section write-out
//!
//! Each section is written independently: parent directories are
//! created on demand and the body becomes the file's full content,
//! mode 0644. A failure here is scoped to its own section.

use crate::error::{Error, Result};
use crate::parser::Section;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write one section to its resolved destination.
///
/// A section without a destination (no header, so no id) is skipped
/// with `Ok(None)`. Otherwise the written path is returned.
pub fn write_section(section: &Section) -> Result<Option<PathBuf>> {
    let Some(path) = &section.destination else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|source| Error::section_write(path.clone(), source))?;
        }
    }

    write_file(path, &section.body).map_err(|source| Error::section_write(path.clone(), source))?;

    debug!("wrote '{}'", path.display());
    Ok(Some(path.clone()))
}

#[cfg(unix)]
fn write_file(path: &Path, body: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(body.as_bytes())
}

#[cfg(not(unix))]
fn write_file(path: &Path, body: &str) -> io::Result<()> {
    fs::write(path, body)
}
