use caat_config::{Config, ConfigError};
use caat_engine::{
    ParseError, ParserRegistry, RenderOptions, parsers::extension_of,
};
use crossterm::style::Stylize;
use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Please provide a file")]
    MissingArgument,
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("Unsupported file format '{extension}'")]
    UnsupportedFormat { extension: String },
    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let path = env::args_os().nth(1).map(PathBuf::from);

    // Nothing reaches stdout unless the whole pipeline succeeded
    match run(path).and_then(|output| write_output(&output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<PathBuf>) -> Result<String, CliError> {
    let path = path.ok_or(CliError::MissingArgument)?;
    if !path.exists() {
        return Err(CliError::FileNotFound(path));
    }

    let options = match Config::load()? {
        Some(config) => {
            log::debug!("loaded config from {}", Config::config_path().display());
            config.render_options()
        }
        None => RenderOptions::default(),
    };

    let registry = ParserRegistry::with_defaults(options);
    let parser = registry
        .for_path(&path)
        .ok_or_else(|| CliError::UnsupportedFormat {
            extension: extension_of(&path),
        })?;

    let content = fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    log::debug!("rendering {} with the {} parser", path.display(), parser.name());

    Ok(parser.parse(&content)?)
}

fn write_output(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(CliError::Output),
    }
}

fn supported_formats() -> String {
    ParserRegistry::with_defaults(RenderOptions::default())
        .supported_extensions()
        .join(", ")
}

fn report(err: &CliError) {
    match err {
        CliError::MissingArgument => {
            eprintln!("{}", format!("Error: {err}").red());
            eprintln!("{}", "Usage: caat <file>".yellow());
            eprintln!(
                "{}",
                format!("Supported formats: {}", supported_formats()).dark_grey()
            );
        }
        CliError::FileNotFound(_) => {
            eprintln!("{}", format!("Error: {err}").red());
        }
        CliError::UnsupportedFormat { .. } => {
            eprintln!("{}", format!("Error: {err}").red());
            eprintln!(
                "{}",
                format!("Supported formats: {}", supported_formats()).yellow()
            );
        }
        CliError::Config(_) => {
            eprintln!("{}", format!("Error: {err}").red());
        }
        CliError::Read { .. } | CliError::Parse(_) | CliError::Output(_) => {
            eprintln!("{}", format!("Error processing file: {err}").red());
        }
    }
}
