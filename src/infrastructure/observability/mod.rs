//! Logging setup shared by the desktop app and the CLI.
//!
//! Console output goes to stderr so the CLI's stdout stays machine-readable.
//! The desktop app adds a second layer that feeds its log panel.

pub mod log_channel;

pub use log_channel::{ChannelWriterFactory, LogBuffer};

use crossbeam_channel::Sender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(ui_logs: Option<Sender<String>>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false); // cleaner

    let ui_layer = ui_logs.map(|sender| {
        tracing_subscriber::fmt::layer()
            .with_writer(ChannelWriterFactory::new(sender))
            .with_ansi(false) // No color codes for UI text
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(ui_layer)
        .init();
}
