//! Diagnostic tracing
//!
//! Controlled by `RUST_LOG` (default `warn`) and written to stderr, so stdout
//! only carries the branch listing and prompts.
//!
//! ```bash
//! RUST_LOG=ghar=debug ghar --force
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
