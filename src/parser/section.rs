//! Section parsing
//!
//! One block of the split document becomes one [`Section`]: the first
//! deep-enough header supplies the id, `<#label>` tokens are rewritten
//! to absolute URLs, and the destination filename is resolved from the
//! id. Header extraction and link rewriting are plain text transforms,
//! kept free of any file I/O so the matching rules can be tested on
//! their own.

use crate::art::ArtLibrary;
use crate::error::Result;
use crate::resolver::Resolver;
use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::LazyLock;

/// First level-2-or-deeper ATX header supplies the section id
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{2,}\s*(.*)").unwrap());

/// Inline `<#label>` link token naming another section
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<#([^>]+)>").unwrap());

/// One narrative unit parsed from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Normalized id derived from the section's first header; empty if
    /// the block had no header
    pub id: String,
    /// Resolved output path; `None` means the section is never written
    pub destination: Option<PathBuf>,
    /// Body text with the header stripped, links rewritten, surrounding
    /// whitespace trimmed, and exactly one trailing newline
    pub body: String,
}

/// Normalize a raw label into a section id: lowercase, with every run
/// of non-alphanumeric characters collapsed into a single hyphen and
/// leading/trailing hyphens stripped.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Pull the section id out of the first level-2-or-deeper header line.
///
/// Returns the normalized id and the body with that header line blanked
/// out. Only the first match counts; later header-like lines stay as
/// plain text. A block without a header gets an empty id.
pub fn extract_header(text: &str) -> (String, String) {
    let mut id = String::new();
    let body = HEADER_RE.replacen(text, 1, |caps: &Captures| {
        id = slugify(&caps[1]);
        String::new()
    });
    (id, body.into_owned())
}

/// Rewrite every `<#label>` token in place with the URL the callback
/// produces for the normalized label. Matches are non-overlapping and
/// processed left to right; text outside the tokens is untouched.
pub fn rewrite_links<F>(body: &str, mut url_for: F) -> String
where
    F: FnMut(&str) -> String,
{
    LINK_RE
        .replace_all(body, |caps: &Captures| url_for(&slugify(&caps[1])))
        .into_owned()
}

/// Parse one raw block into a [`Section`].
///
/// Art, when the library has some for this id, is prepended with a
/// blank line before the final trim. Missing art is not an error; an
/// unreadable art file is.
pub fn parse_section(text: &str, resolver: &Resolver, art: &ArtLibrary) -> Result<Section> {
    let (id, body) = extract_header(text);
    let mut body = rewrite_links(&body, |label| resolver.url_for(label));

    if let Some(art) = art.load(&id)? {
        body = format!("{art}\n\n{body}");
    }

    let body = format!("{}\n", body.trim());
    let destination = resolver.filename_for(&id);

    Ok(Section {
        id,
        destination,
        body,
    })
}
