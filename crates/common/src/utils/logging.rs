use std::io;

use configs::{LogFormat, LoggingConfig};
use tracing::{error, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Assemble the fmt subscriber selected by `cfg.format`, writing to `writer`.
fn subscriber<W>(cfg: &LoggingConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = fmt()
        .with_env_filter(env_filter(&cfg.filter))
        .with_target(false)
        .with_writer(writer);
    match cfg.format {
        LogFormat::Compact => Box::new(builder.compact().finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

/// Initialize tracing on stdout according to the `[logging]` config section.
/// - Respects `RUST_LOG` if set, otherwise uses `cfg.filter`
/// - `compact` for humans, `json` for container log collection
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(cfg: &LoggingConfig) -> bool {
    subscriber(cfg, io::stdout).try_init().is_ok()
}

/// Defaults used before configuration has been read.
pub fn init_logging_default() -> bool {
    init_logging(&LoggingConfig::default())
}

/// Route panics through tracing as a structured `event = "panic"` error.
pub fn install_panic_hook(service: &'static str) {
    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));
}
