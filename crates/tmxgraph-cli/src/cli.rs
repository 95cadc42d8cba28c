//! Command-line interface for the tmxgraph utility
//!
//! Provides a CLI to turn a modeling-tool XML export into triple-graph JSON.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use tmxgraph::core::logging::init_logging;
use tmxgraph::plugins::orchestrator::{ContainerClass, Orchestrator};
use tmxgraph::{DiagramKind, Document, ExtractConfig, DEFAULT_LABEL, DEFAULT_MAX_DEPTH};

/// tmxgraph - Convert SysML XML exports into triple graphs
#[derive(Parser)]
#[command(name = "tmxgraph")]
#[command(about = "Extract (subject, relation, object) triples from SysML modeling-tool XML exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (off|trace|debug|info|warn|error); overrides TMXGRAPH_LOG_LEVEL
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); overrides TMXGRAPH_LOG_FORMAT
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the triple graph of every diagram
    Extract {
        /// Input XML export (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the graph JSON (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entity label stamped on every head and tail
        #[arg(long, default_value = DEFAULT_LABEL)]
        label: String,

        /// Maximum nesting depth of named nodes
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Make relation types safe graph-store identifiers
        #[arg(long)]
        sanitize: bool,
    },

    /// Classify the diagram containers of an export
    Detect {
        /// Input XML export (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported diagram types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that an export extracts cleanly
    Validate {
        /// Input XML export (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum nesting depth of named nodes
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

/// Main CLI application
pub struct TmxgraphApp {
    orchestrator: Orchestrator,
}

impl TmxgraphApp {
    /// Create a new application instance with every diagram kind registered
    pub fn new() -> Self {
        Self {
            orchestrator: Orchestrator::with_all_plugins(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Unset flags fall through to the environment inside init_logging
        if let Err(e) = init_logging(
            cli.log_level.map(|level| level.as_str()),
            cli.log_format.map(|format| format.as_str()),
        ) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("tmxgraph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Extract {
                input,
                output,
                label,
                max_depth,
                sanitize,
            } => {
                let config = extract_config(label, max_depth);
                self.extract_command(input, output, &config, sanitize, cli.verbose)
            }
            Commands::Detect { input } => {
                let config = extract_config(DEFAULT_LABEL.to_string(), DEFAULT_MAX_DEPTH);
                self.detect_command(input, &config, cli.verbose)
            }
            Commands::Types { json } => self.types_command(json, cli.verbose),
            Commands::Validate { input, max_depth } => {
                let config = extract_config(DEFAULT_LABEL.to_string(), max_depth);
                self.validate_command(input, &config, cli.verbose)
            }
        }
    }

    /// Handle the extract command
    fn extract_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config: &ExtractConfig,
        sanitize: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let document = Document::parse(&content)?;
        let (triples, report) = self.orchestrator.extract(&document, config);
        let mut graph = tmxgraph::GraphDocument::from_triples(&triples, &config.label);
        if sanitize {
            graph = graph.sanitized();
        }

        if verbose {
            eprintln!(
                "Extracted {} triples from {} diagrams ({} skipped, {} diagnostics)",
                triples.len(),
                report.diagrams.len(),
                report.skipped.len(),
                report.diagnostics.len()
            );
        }

        self.write_output(output, &graph.to_json_pretty()?)
    }

    /// Handle the detect command
    fn detect_command(&self, input: Option<PathBuf>, config: &ExtractConfig, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let document = Document::parse(&content)?;
        for detection in self.orchestrator.detect(&document, config) {
            let kind = match detection.class {
                ContainerClass::Diagram(kind) => kind.as_str(),
                ContainerClass::Table => "table",
                ContainerClass::Unrecognized => "unrecognized",
            };
            println!("{}\t{}", kind, detection.name);
        }
        Ok(())
    }

    /// Handle the types command
    fn types_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported diagram types");
        }

        if json {
            let supported: Vec<serde_json::Value> = DiagramKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.as_str(),
                        "description": kind.description(),
                    })
                })
                .collect();
            let types = serde_json::json!({
                "supported_types": supported,
                "total": DiagramKind::ALL.len()
            });
            println!("{}", serde_json::to_string_pretty(&types)?);
        } else {
            println!("Supported diagram types:");
            for kind in DiagramKind::ALL {
                println!("  {:<15} - {}", kind.as_str(), kind.description());
            }
            println!();
            println!("Total: {} diagram types supported", DiagramKind::ALL.len());
        }

        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, config: &ExtractConfig, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let document = match Document::parse(&content) {
            Ok(document) => document,
            Err(e) => {
                println!("✗ Invalid export: {}", e);
                return Err(e.into());
            }
        };

        let (triples, report) = self.orchestrator.extract(&document, config);
        println!(
            "✓ Valid export: {} diagrams, {} triples, {} skipped, {} diagnostics",
            report.diagrams.len(),
            triples.len(),
            report.skipped.len(),
            report.diagnostics.len()
        );
        if verbose {
            for diagnostic in &report.diagnostics {
                eprintln!("  {}", diagnostic);
            }
        }
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        debug!(input = ?input, "Reading input");
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                writeln!(stdout, "{}", content.trim_end_matches('\n'))?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for TmxgraphApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run configuration shared by every command that reads an export
fn extract_config(label: String, max_depth: usize) -> ExtractConfig {
    ExtractConfig::new().with_label(label).with_max_depth(max_depth)
}
