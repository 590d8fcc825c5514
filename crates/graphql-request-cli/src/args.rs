use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use graphql_request_builder::{BuilderConfig, OperationType};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gqlreq", version)]
/// Render a JSON operation tree into a GraphQL request body
pub(crate) struct Args {
    /// Path to the JSON operation tree, a single operation or an array of them. Read from stdin when omitted.
    pub input: Option<PathBuf>,
    /// The kind of operation to render
    #[arg(short = 't', long, value_enum, default_value_t = OperationKind::Query)]
    pub operation_type: OperationKind,
    /// Path to a TOML file with the rendering options
    #[arg(short, long, env = "GQLREQ_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Escape string literals, overriding the configuration file
    #[arg(long)]
    pub escape_strings: bool,
    /// Maximum nesting depth, overriding the configuration file
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
    /// Set the logging level
    #[arg(long = "log", env = "GQLREQ_LOG", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl From<OperationKind> for OperationType {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Query => OperationType::Query,
            OperationKind::Mutation => OperationType::Mutation,
            OperationKind::Subscription => OperationType::Subscription,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warning and error messages
    Info,
    /// Debug, info, warning and error messages
    Debug,
    /// Everything, including the rendering spans
    Trace,
}

impl LogLevel {
    fn as_level_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Args {
    /// Options read from the configuration file, if any, with the command line flags applied on top.
    pub fn builder_config(&self) -> anyhow::Result<BuilderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
            }
            None => BuilderConfig::default(),
        };

        if self.escape_strings {
            config.escape_strings = true;
        }

        if let Some(max_depth) = self.max_depth {
            config.max_depth = Some(max_depth);
        }

        Ok(config)
    }

    /// Only the builder and the binary log, everything else is off.
    pub fn log_filter(&self) -> EnvFilter {
        let level = self.log_level.as_level_str();
        EnvFilter::new(format!("graphql_request_builder={level},gqlreq={level},off"))
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
