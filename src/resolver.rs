//! Path resolution
//!
//! One mapping strategy decides how a section id becomes a relative
//! path fragment; the resolver then joins that fragment against the
//! base hostname (for links) or the base output directory (for files).
//! Fragments use `/` so the same fragment is valid in both worlds.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

/// Hostname schemes that are passed through untouched
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:f|ht)tps?://").unwrap());

/// A uniform mapping from (id, destination root) to a relative fragment
pub type MapperFn = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// One per-id override in a [`PathMapper::Table`]
pub enum MapEntry {
    /// A fixed fragment, used verbatim
    Fixed(String),
    /// A mapping function applied to this id only
    Func(MapperFn),
}

/// Pluggable strategy turning a section id into a relative fragment.
///
/// Either a single function applied to every id, or a table of per-id
/// overrides with a default for everything else. Callers go through
/// [`PathMapper::resolve`] and never branch on the variant.
pub enum PathMapper {
    Uniform(MapperFn),
    Table {
        overrides: HashMap<String, MapEntry>,
        default: MapperFn,
    },
}

/// Default mapping: `<destination>/<id>.txt`
pub fn default_mapping(id: &str, destination: &str) -> String {
    if destination.is_empty() {
        format!("{id}.txt")
    } else {
        format!("{destination}/{id}.txt")
    }
}

impl PathMapper {
    /// A single mapping function applied to every id
    pub fn uniform<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        PathMapper::Uniform(Box::new(f))
    }

    /// Per-id overrides backed by the default mapping
    pub fn table(overrides: HashMap<String, MapEntry>) -> Self {
        PathMapper::Table {
            overrides,
            default: Box::new(default_mapping),
        }
    }

    /// Per-id fixed fragments, as loaded from a config file
    pub fn from_overrides(overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(id, fragment)| (id, MapEntry::Fixed(fragment)))
            .collect();
        Self::table(overrides)
    }

    /// Resolve the relative fragment for an id
    pub fn resolve(&self, id: &str, destination: &str) -> String {
        match self {
            PathMapper::Uniform(f) => f(id, destination),
            PathMapper::Table { overrides, default } => match overrides.get(id) {
                Some(MapEntry::Fixed(fragment)) => fragment.clone(),
                Some(MapEntry::Func(f)) => f(id, destination),
                None => default(id, destination),
            },
        }
    }
}

impl Default for PathMapper {
    fn default() -> Self {
        Self::uniform(default_mapping)
    }
}

impl fmt::Debug for PathMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMapper::Uniform(_) => write!(f, "PathMapper::Uniform"),
            PathMapper::Table { overrides, .. } => {
                write!(f, "PathMapper::Table({} overrides)", overrides.len())
            }
        }
    }
}

/// Resolves section ids to link URLs and output filenames
#[derive(Debug)]
pub struct Resolver {
    base_url: Url,
    destination: String,
    base_path: PathBuf,
    mapper: PathMapper,
}

impl Resolver {
    /// Create a resolver for one generation run.
    ///
    /// A hostname without a recognized scheme (http, https, ftp, ftps)
    /// gets an `http://` prefix before being parsed as the base URL.
    pub fn new(
        hostname: &str,
        destination: &str,
        base_path: impl Into<PathBuf>,
        mapper: PathMapper,
    ) -> Result<Self> {
        let prefixed = ensure_scheme(hostname);
        let base_url = Url::parse(&prefixed).map_err(|source| Error::Hostname {
            hostname: hostname.to_string(),
            source,
        })?;

        Ok(Self {
            base_url,
            destination: destination.to_string(),
            base_path: base_path.into(),
            mapper,
        })
    }

    /// Absolute link URL for a section id
    pub fn url_for(&self, id: &str) -> String {
        let fragment = self.mapper.resolve(id, &self.destination);
        let resolved = match self.base_url.join(&fragment) {
            Ok(url) => url.to_string(),
            // A fragment the URL grammar rejects still yields a
            // syntactically plausible link rather than aborting the run.
            Err(_) => format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                fragment
            ),
        };

        debug!("section '{id}' will link to '{resolved}'");
        resolved
    }

    /// Output filename for a section id; `None` when the id is empty,
    /// meaning the section is never written
    pub fn filename_for(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() {
            return None;
        }

        let fragment = self.mapper.resolve(id, &self.destination);
        let path = self.base_path.join(fragment);
        debug!("section '{id}' will be written to '{}'", path.display());
        Some(path)
    }
}

fn ensure_scheme(hostname: &str) -> String {
    if SCHEME_RE.is_match(hostname) {
        hostname.to_string()
    } else {
        format!("http://{hostname}")
    }
}
