// ABOUTME: Configuration module for the SquatForm core crate
// ABOUTME: Environment-based runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SquatForm Labs

//! Configuration management. All runtime configuration comes from
//! environment variables; there is no config file surface.

/// Environment-based configuration management
pub mod environment;

pub use environment::{CoreConfig, Environment, HistoryConfig, LogLevel};
