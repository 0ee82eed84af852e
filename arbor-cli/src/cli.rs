//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::edits::ScriptedEdit;

#[derive(Parser)]
#[command(
    name = "arbor",
    version,
    about = "Render a nested record document as a tree view"
)]
pub struct Cli {
    /// Record document: a file path, or an http(s) URL to fetch.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// What to print.
    #[arg(long = "format", value_enum, default_value = "markup")]
    pub format: OutputFormat,

    /// Run a context menu action before printing, as ACTION:PATH[:TEXT].
    /// PATH is dot-separated child positions, e.g. `add:0.1:New item`.
    /// May be repeated; edits apply in order.
    #[arg(long = "edit", value_name = "EDIT")]
    pub edits: Vec<ScriptedEdit>,

    /// Open every branch before printing.
    #[arg(long = "expand-all")]
    pub expand_all: bool,

    /// Request timeout in seconds when SOURCE is a URL.
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Log level.
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevelArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Element markup, as a host page would embed it.
    Markup,
    /// Indented text; children of closed branches are hidden.
    Outline,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Whether SOURCE names a remote document.
    pub fn source_is_url(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}
