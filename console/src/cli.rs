//! Command-line arguments and logging setup.

use std::io;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use users_core::DEFAULT_BASE_URL;

/// Interactive client for the users REST API.
#[derive(Parser, Debug, Clone)]
#[command(name = "users", version, about = "Manage user records over the users REST API")]
pub struct Args {
    /// Base URL the `/users` resource lives under.
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter, e.g. `info` or `users_core=debug`.
    #[arg(long, env = "USERS_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

/// Install the global subscriber. Logs go to stderr so they never interleave
/// with the rendered table on stdout.
pub fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}
