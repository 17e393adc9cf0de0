// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so that stdout carries nothing but result lines.
//! Silent by default (`warn`); `PROBE_LOG=trace` shows every probe and match.
//!
//! | Variable           | Meaning                                   |
//! |--------------------|-------------------------------------------|
//! | `PROBE_LOG`        | `EnvFilter` directives, default `warn`    |
//! | `PROBE_LOG_FORMAT` | `json` for JSON lines, anything else text |

use std::io;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "PROBE_LOG";
pub const LOG_FORMAT_ENV: &str = "PROBE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse a `PROBE_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or(LogFormat::Text)
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    // Already installed (tests, or a host program) is fine.
    let _ = try_init();
}

/// Install the global subscriber, reporting if one is already set.
pub fn try_init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_writer(io::stderr),
            )
            .try_init(),
    }
}
