//! ASCII art lookup
//!
//! Art assets live as flat `<id>.txt` files in a configured directory
//! and are prepended to their section's body. Absence is the common
//! case and is never an error.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Per-section ASCII art, looked up by section id
#[derive(Debug, Clone, Default)]
pub struct ArtLibrary {
    dir: Option<PathBuf>,
}

impl ArtLibrary {
    /// Art library rooted at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir: PathBuf = dir.into();
        if dir.as_os_str().is_empty() {
            Self::disabled()
        } else {
            Self { dir: Some(dir) }
        }
    }

    /// A library that never has art
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Look up the art for a section id.
    ///
    /// Returns `Ok(None)` when the library is disabled, the id is
    /// empty, or no `<id>.txt` file exists. Any other read failure is a
    /// real error.
    pub fn load(&self, id: &str) -> Result<Option<String>> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };
        if id.is_empty() {
            return Ok(None);
        }

        let path = dir.join(format!("{id}.txt"));
        match fs::read_to_string(&path) {
            Ok(art) => {
                debug!("found art for '{id}'");
                Ok(Some(art))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::ArtRead { path, source }),
        }
    }
}
