// Document parsing module

pub mod section;
pub mod splitter;

pub use section::{extract_header, parse_section, rewrite_links, slugify, Section};
pub use splitter::split_document;
