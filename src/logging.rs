// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the demo binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary. The filter is read from `MESSG_LOG` using the
//! usual `EnvFilter` directive syntax (`debug`, `messg=trace,iced=warn`).

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directives.
pub const ENV_LOG_FILTER: &str = "MESSG_LOG";

/// Directives used when `MESSG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Builds the filter from `MESSG_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let installed = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter_from_env())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(env = ENV_LOG_FILTER, "logging initialized");
    }
}
