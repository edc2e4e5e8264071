//! Logging setup using the tracing ecosystem.
//!
//! The client emits `tracing` events on its own. Applications that do not
//! install a subscriber themselves can call [`init`] to get readable output
//! on stderr.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "jenkins_async=info,warn";

/// Initialize a global tracing subscriber.
///
/// Log levels are taken from `RUST_LOG` when set:
/// - `RUST_LOG=jenkins_async=debug` - every request URL and status
/// - `RUST_LOG=jenkins_async=trace` - span enter/exit as well
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
///
/// # Example
///
/// ```no_run
/// jenkins_async::logging::init().expect("Failed to initialize logging");
/// ```
pub fn init() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(env_filter());

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "jenkins-async logging initialized");
    Ok(())
}

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
