// ABOUTME: System-wide constants and configuration values for SquatForm core
// ABOUTME: Service names, environment variable keys, limits, and defaults
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Application constants and environment-based configuration keys. Hardcoded
//! defaults live here; runtime overrides are read by [`crate::config`].

/// Service identity used in structured log output
pub mod service_names {
    /// Canonical service name for this crate
    pub const SQUATFORM_CORE: &str = "squatform-core";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Environment variable keys recognized by the configuration layer
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Log level override (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "RUST_LOG";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Upper bound on sessions kept in the published history snapshot
    pub const HISTORY_CACHE_LIMIT: &str = "SQUATFORM_HISTORY_CACHE_LIMIT";
}

/// Resource limits
pub mod limits {
    /// Default cap on sessions carried in the in-process history snapshot.
    /// Older sessions stay in the store; the snapshot is a bounded view.
    pub const DEFAULT_HISTORY_CACHE_LIMIT: usize = 200;
}

/// Default configuration values
pub mod defaults {
    /// Default log level when none is configured
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
