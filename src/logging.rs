use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

use crate::Result;

/// Install a global subscriber that logs to standard error, and route chemfiles warnings
/// through it.
///
/// Standard output is reserved for the records, so nothing is ever logged there.
///
/// # Errors
///
/// Fails with [`Error::Logging`](crate::Error::Logging) if a global subscriber has already
/// been installed.
pub fn setup_logging(level: LevelFilter) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level)
        .with(stderr_layer)
        .try_init()?;

    chemfiles::set_warning_callback(|message: &str| {
        tracing::warn!(target: "chemfiles", "{message}");
    });

    Ok(())
}
