// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics setup for the `levdict` binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. [`init`] installs one that writes to stderr so
//! match output on stdout stays clean for pipes.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber.
///
/// # Arguments
/// * `log_level` - Filter directive from `--log-level`; overrides `RUST_LOG`
/// * `no_color` - Disable ANSI colors
///
/// Calling this twice (as tests that share a process do) is not an error.
pub fn init(log_level: Option<&str>, no_color: bool) -> io::Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .with_filter(filter);

    // Fails only when a global subscriber or `log` logger is already
    // installed; that one keeps receiving events.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
    Ok(())
}
