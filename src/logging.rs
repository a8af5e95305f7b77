//! Structured logging bootstrap using `tracing`.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global tracing subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_directive` when set. Report output goes to
/// stdout, so logs must never share it.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    let timer = fmt::time::UtcTime::rfc_3339();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(timer)
        .with_level(true)
        .with_line_number(true)
        .with_file(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    tracing::debug!(filter = default_directive, "tracing initialised");
    Ok(())
}

/// Directive for a `-v` count: warn, info, debug, trace.
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
