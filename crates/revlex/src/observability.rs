//! Logging setup for the CLI.
//!
//! Human-facing output goes to stdout via the command implementations; tracing
//! output goes to a JSONL log file so that terminal output stays clean. The
//! file location can be steered with `REVLEX_LOG_PATH` (exact file) or
//! `REVLEX_LOG_DIR` (directory, file named `revlex.log.jsonl`).

use anyhow::Context;
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output should be written.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Directory for the log file.
    pub log_dir: Utf8PathBuf,
    /// File name within `log_dir`.
    pub log_file: String,
}

impl ObservabilityConfig {
    /// Build from environment variables, falling back to `config_log_dir` and
    /// then to the user data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<Utf8PathBuf>) -> Self {
        if let Ok(path) = std::env::var("REVLEX_LOG_PATH") {
            let path = Utf8PathBuf::from(path);
            let log_dir = path
                .parent()
                .map_or_else(|| Utf8PathBuf::from("."), camino::Utf8Path::to_path_buf);
            let log_file = path
                .file_name()
                .unwrap_or("revlex.log.jsonl")
                .to_string();
            return Self { log_dir, log_file };
        }

        let log_dir = std::env::var("REVLEX_LOG_DIR")
            .ok()
            .map(Utf8PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                let proj = directories::ProjectDirs::from("", "", "revlex")?;
                Utf8PathBuf::from_path_buf(proj.data_dir().join("logs")).ok()
            })
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Self {
            log_dir,
            log_file: "revlex.log.jsonl".to_string(),
        }
    }
}

/// Build the log filter from verbosity flags and the configured default level.
///
/// `RUST_LOG` wins when set; otherwise `-q` forces `error` and each `-v` raises
/// the level from the configured default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber with a JSONL file writer.
///
/// The returned guard must be held for the lifetime of the program so that
/// buffered log lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir))?;

    let appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
