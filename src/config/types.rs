//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `reqforge` binary.
///
/// Every repeated option maps onto one builder mutator, applied in the order
/// headers, cookies, query parameters.
#[derive(Debug, Clone, Parser)]
#[command(name = "reqforge", version, about = "Build and send a single HTTP request")]
pub struct Cli {
    /// Target URL (http or https)
    pub url: String,

    /// HTTP method (GET, POST, PUT, DELETE, HEAD, OPTIONS)
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Request header as `Name: value` (repeatable, later values overwrite)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Cookie as `name=value` (repeatable)
    #[arg(short = 'b', long = "cookie")]
    pub cookies: Vec<String>,

    /// Query parameter as `name=value` (repeatable, values accumulate)
    #[arg(short = 'q', long = "query")]
    pub query: Vec<String>,

    /// Request body (sent only with POST and PUT)
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Follow redirects (0 disables; any other value follows up to 10)
    #[arg(long, default_value_t = 0)]
    pub max_redirects: usize,

    /// Print response headers before the body
    #[arg(short = 'i', long)]
    pub include: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
