//! Logging setup for extraction runs
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's job. This module is what the CLI (and tests) use to do that.
//!
//! # Usage
//!
//! ```rust,no_run
//! use tmxgraph::core::logging::init_logging;
//!
//! init_logging(Some("debug"), Some("pretty")).unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `TMXGRAPH_LOG_LEVEL`: log level or full filter directive
//! - `TMXGRAPH_LOG_FORMAT`: `compact`, `pretty` or `json`
//! - `RUST_LOG`: consulted when `TMXGRAPH_LOG_LEVEL` is unset
//!
//! Per-component filtering works on module paths, e.g.
//! `RUST_LOG="info,tmxgraph::plugins::sequence=trace"`.

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

pub const LEVEL_ENV: &str = "TMXGRAPH_LOG_LEVEL";
pub const FORMAT_ENV: &str = "TMXGRAPH_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line output
    #[default]
    Compact,
    /// Multi-line output with source locations
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Effective logging settings after applying arguments and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

/// Resolve the level directive and format.
///
/// Explicit arguments win, then `TMXGRAPH_LOG_*`, then `RUST_LOG` for the
/// level, then `info` / compact.
pub fn resolve_settings(level: Option<&str>, format: Option<&str>) -> Result<LogSettings, String> {
    let directive = level
        .map(str::to_string)
        .or_else(|| std::env::var(LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "info".to_string());

    let format = match format
        .map(str::to_string)
        .or_else(|| std::env::var(FORMAT_ENV).ok())
    {
        Some(name) => LogFormat::from_str(&name).map_err(|e| format!("Invalid log format: {}", e))?,
        None => LogFormat::default(),
    };

    Ok(LogSettings { directive, format })
}

/// Initialize the global tracing subscriber.
///
/// Fails if the format is invalid or a global subscriber is already set.
/// An unparsable level directive falls back to `info`.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = resolve_settings(level, format)?;

    #[cfg(target_arch = "wasm32")]
    {
        let _ = settings;
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = EnvFilter::try_new(&settings.directive).unwrap_or_else(|_| EnvFilter::new("info"));

        match settings.format {
            LogFormat::Compact => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(false)
                            .with_level(true)
                            .with_span_events(FmtSpan::NONE),
                    )
                    .try_init()?;
            }
            LogFormat::Pretty => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .pretty(),
                    )
                    .try_init()?;
            }
            LogFormat::Json => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_span_events(FmtSpan::CLOSE)
                            .json(),
                    )
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging with default settings
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
