//! CLI module for Textquest

mod args;

pub use args::{Args, Command};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::parser::Section;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Build {
            input,
            hostname,
            destination,
            output,
            art,
            config,
            encoding,
            quiet,
        } => {
            let cfg = load_config(
                config,
                Some(input),
                hostname,
                destination,
                output,
                art,
                encoding,
                quiet,
            );
            init_logging(cfg.logging);

            let generator = Generator::new(cfg)?;
            let report = generator.generate()?;

            println!("Parsed {} sections", report.sections.len());
            if report.all_written() {
                println!("Wrote {} files", report.written);
                Ok(())
            } else {
                Err(Error::other(format!(
                    "{} of {} writes failed",
                    report.failed,
                    report.failed + report.written
                )))
            }
        }

        Command::Check {
            input,
            hostname,
            destination,
            config,
            encoding,
            quiet,
        } => {
            let cfg = load_config(
                config,
                Some(input),
                hostname,
                destination,
                None,
                None,
                encoding,
                quiet,
            );
            init_logging(cfg.logging);

            let generator = Generator::new(cfg)?;
            let sections = generator.parse()?;

            for section in &sections {
                println!("  {}", describe(section));
            }
            println!("Parsed {} sections", sections.len());
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn load_config(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    hostname: Option<String>,
    destination: Option<String>,
    output: Option<PathBuf>,
    art: Option<PathBuf>,
    encoding: Option<String>,
    quiet: bool,
) -> Config {
    // Config file first, CLI flags on top.
    let mut cfg = match &config_path {
        Some(path) => Config::load_or_default(path),
        None => Config::load_or_default(Path::new("textquest.toml")),
    };

    cfg.merge_cli(input, hostname, destination, output, art, encoding, quiet);
    cfg
}

fn init_logging(logging: bool) {
    let level = if logging {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}

fn describe(section: &Section) -> String {
    let id = if section.id.is_empty() {
        "(unlinked)"
    } else {
        &section.id
    };

    match &section.destination {
        Some(path) => format!("{}  ->  {}", id, path.display()),
        None => format!("{}  ->  (not written)", id),
    }
}
