//! Textquest - turn one Markdown-ish document into a playable set of
//! interlinked plain-text pages
//!
//! A document is split on asterisk horizontal rules; each section's
//! first `##` header becomes its id, `<#label>` tokens become absolute
//! URLs, and every identified section is written to its own text file.
//! Upload the output somewhere and the links make it playable.

pub mod art;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod resolver;
pub mod writer;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use generator::{Generator, RunReport};
pub use parser::{parse_section, split_document, Section};
pub use resolver::{MapEntry, PathMapper, Resolver};
