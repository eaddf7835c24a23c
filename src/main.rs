use crate::AppError::ConfigError;
use clap::Parser;
use config::Config;
use std::io;
use std::path::PathBuf;
use tabmaker::{parse_token_lines, FileWriter, TabDocument, TabError, DEFAULT_BPM};

mod config;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tabmaker=info"))
        .init();

    // args
    let mut args = CliArgs::parse();
    let input = args.input.take().map(PathBuf::from);

    // check if token file exists
    let mut lines = match &input {
        Some(input) => {
            if !input.exists() {
                let err = ConfigError(format!("Token file not found {input:?}"));
                return Err(err);
            }
            log::info!("Reading tokens from {input:?}");
            parse_token_lines(&std::fs::read_to_string(input)?)
        }
        None => Vec::new(),
    };
    lines.extend(
        args.line
            .iter()
            .map(|line| line.split_whitespace().map(str::to_string).collect()),
    );

    // read local config
    let local_config = Config::read_config()?;
    let bpm = args
        .bpm
        .or_else(|| local_config.get_default_bpm())
        .unwrap_or(DEFAULT_BPM);

    // build tab
    let mut tab = TabDocument::new(bpm, args.capo.take(), args.notes.take());
    for (index, tokens) in lines.iter().enumerate() {
        tab.add_line(tokens.as_slice()).map_err(|err| {
            AppError::ParsingError(format!("tab line {}: {err}", index + 1))
        })?;
    }
    log::info!("Built tab with {} lines at {bpm} BPM", tab.line_count());

    if args.stdout || args.name.is_none() {
        println!("{tab}");
    }
    if let Some(name) = &args.name {
        let mut writer = FileWriter::new(local_config.get_tabs_folder());
        tab.save_to(Some(name.as_str()), &mut writer)?;
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Tempo in beats per minute (defaults to the configured value, then 100).
    #[arg(long)]
    bpm: Option<u32>,
    /// Optional capo position.
    #[arg(long)]
    capo: Option<String>,
    /// Optional free text notes printed in the header.
    #[arg(long)]
    notes: Option<String>,
    /// Optional path to a token file, one tab line per line.
    #[arg(long)]
    input: Option<String>,
    /// Tab line given as whitespace separated tokens, can be repeated.
    #[arg(long)]
    line: Vec<String>,
    /// Save the tab as `<name>.txt` in the configured tabs folder.
    #[arg(long)]
    name: Option<String>,
    /// Print the tab even when saving it.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<TabError> for AppError {
    fn from(error: TabError) -> Self {
        match error {
            TabError::ParsingError(s) => Self::ParsingError(s),
            TabError::ConfigError(s) => Self::ConfigError(s),
            TabError::ValidationError(s) => Self::ValidationError(s),
            TabError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
