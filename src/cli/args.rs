use crate::{
    constants::{exit_codes, verbosity},
    renderer::EngineKind,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for envplate.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template file to render, or `-` to read it from stdin.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rendering engine.
    #[arg(short, long, value_enum, default_value_t = EngineKind::Passes)]
    pub engine: EngineKind,

    /// Set a variable, overriding the environment (repeatable).
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Variables as a JSON object, applied over the environment.
    #[arg(long, value_name = "JSON")]
    pub vars: Option<String>,

    /// Do not read variables from the environment.
    #[arg(long = "no-env")]
    pub no_env: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments. A missing template prints the usage line to
/// stderr and exits with status 1.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let usage = Args::command().render_usage();
            eprintln!("{usage}");
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
