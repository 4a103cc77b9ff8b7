//! Generation pipeline
//!
//! Three strict phases: read the source document, parse every section
//! in document order, then write all eligible sections out in parallel.
//! The parsed section sequence is always returned; write failures only
//! show up in the run report's counters.

use crate::art::ArtLibrary;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser::{parse_section, split_document, Section};
use crate::resolver::{PathMapper, Resolver};
use crate::writer;
use encoding_rs::Encoding;
use log::{info, warn};
use rayon::prelude::*;
use std::fs;

/// Outcome of one generation run
#[derive(Debug)]
pub struct RunReport {
    /// Every parsed section, in document order
    pub sections: Vec<Section>,
    /// Number of section files written successfully
    pub written: usize,
    /// Number of section writes that failed
    pub failed: usize,
}

impl RunReport {
    /// Whether every dispatched write succeeded
    pub fn all_written(&self) -> bool {
        self.failed == 0
    }
}

/// Drives the read -> parse-all -> write-all pipeline for one document
pub struct Generator {
    config: Config,
    resolver: Resolver,
    art: ArtLibrary,
}

impl Generator {
    /// Create a generator from a validated config.
    ///
    /// Per-id entries in the config's `[paths]` table become fixed
    /// overrides on top of the default mapping.
    pub fn new(config: Config) -> Result<Self> {
        let mapper = if config.paths.is_empty() {
            PathMapper::default()
        } else {
            PathMapper::from_overrides(config.paths.clone())
        };
        Self::with_mapper(config, mapper)
    }

    /// Create a generator with an explicit path mapping strategy,
    /// ignoring the config's `[paths]` table.
    pub fn with_mapper(config: Config, mapper: PathMapper) -> Result<Self> {
        config.validate()?;

        let resolver = Resolver::new(
            &config.site.hostname,
            &config.site.destination,
            config.output.base_path.clone(),
            mapper,
        )?;

        let art = match &config.output.art_path {
            Some(dir) => ArtLibrary::new(dir),
            None => ArtLibrary::disabled(),
        };

        Ok(Self {
            config,
            resolver,
            art,
        })
    }

    /// Read and parse the document without touching the output
    /// directory. Sections come back in document order.
    pub fn parse(&self) -> Result<Vec<Section>> {
        let text = self.read_source()?;
        let sections = split_document(&text)
            .iter()
            .map(|block| parse_section(block, &self.resolver, &self.art))
            .collect::<Result<Vec<_>>>()?;

        info!("parsed {} sections", sections.len());
        Ok(sections)
    }

    /// Run the full pipeline: parse, then write every section that has
    /// a destination.
    ///
    /// Writes run in parallel and all of them settle regardless of
    /// individual failures; one failing section never blocks a sibling.
    pub fn generate(&self) -> Result<RunReport> {
        let sections = self.parse()?;

        let outcomes: Vec<Result<_>> = sections
            .par_iter()
            .filter(|section| section.destination.is_some())
            .map(writer::write_section)
            .collect();

        let mut written = 0;
        let mut failed = 0;
        for outcome in outcomes {
            match outcome {
                Ok(_) => written += 1,
                Err(e) => {
                    failed += 1;
                    warn!("{e}");
                }
            }
        }

        if failed == 0 {
            info!("wrote {written} files");
        } else {
            warn!("write phase finished with {failed} failure(s), {written} written");
        }

        Ok(RunReport {
            sections,
            written,
            failed,
        })
    }

    fn read_source(&self) -> Result<String> {
        if let Some(text) = &self.config.input.text {
            return Ok(text.clone());
        }

        let Some(path) = &self.config.input.file else {
            return Err(Error::config_validation(
                "either input.text or input.file is required",
            ));
        };

        info!("reading '{}'", path.display());
        let bytes = fs::read(path).map_err(|source| Error::source_read(path.clone(), source))?;

        let encoding = Encoding::for_label(self.config.input.encoding.as_bytes())
            .ok_or_else(|| Error::Encoding(self.config.input.encoding.clone()))?;
        let (text, _, _) = encoding.decode(&bytes);
        Ok(text.into_owned())
    }
}
