//! Logging setup for the command-line tool, using `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to binaries.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber at `level`. `RUST_LOG` overrides the level when set.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,psrtimer={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).without_time())
        .init();
}
