// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime logging setup.
//!
//! Generated programs either call one of the `hpi_logging_*` functions or
//! let `hpi_runtime_init` set logging up from the configured `log_level`.
//! Whichever runs first wins; later calls report `HPI_ALREADY_INITIALIZED`.

use env_logger::{Builder, Env};

use super::HpiError;

/// Log level for runtime logging
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpiLogLevel {
    HpiLogOff = 0,
    HpiLogError = 1,
    HpiLogWarn = 2,
    HpiLogInfo = 3,
    HpiLogDebug = 4,
    HpiLogTrace = 5,
}

impl From<HpiLogLevel> for log::LevelFilter {
    fn from(level: HpiLogLevel) -> Self {
        match level {
            HpiLogLevel::HpiLogOff => log::LevelFilter::Off,
            HpiLogLevel::HpiLogError => log::LevelFilter::Error,
            HpiLogLevel::HpiLogWarn => log::LevelFilter::Warn,
            HpiLogLevel::HpiLogInfo => log::LevelFilter::Info,
            HpiLogLevel::HpiLogDebug => log::LevelFilter::Debug,
            HpiLogLevel::HpiLogTrace => log::LevelFilter::Trace,
        }
    }
}

fn install(mut builder: Builder) -> HpiError {
    match builder.format_timestamp_millis().try_init() {
        Ok(()) => HpiError::HpiOk,
        Err(_) => HpiError::HpiAlreadyInitialized,
    }
}

/// Install the stderr logger, honouring `RUST_LOG` over `default_filter`.
///
/// `default_filter` uses `RUST_LOG` syntax, e.g. `warn` or `hpi_dynamic=trace`.
pub(crate) fn init_with_default(default_filter: &str) -> HpiError {
    install(Builder::from_env(
        Env::default().default_filter_or(default_filter),
    ))
}

/// Initialize runtime logging at a fixed level, ignoring `RUST_LOG`.
///
/// # Safety
/// Must be called from a single thread during initialization.
///
/// # Returns
/// `HpiError::HpiOk` on success, `HpiError::HpiAlreadyInitialized` if a logger
/// is already installed
///
/// # Example (C)
/// ```c
/// hpi_logging_init(HPI_LOG_TRACE); // shows every JSON conversion
/// ```
#[no_mangle]
pub unsafe extern "C" fn hpi_logging_init(level: HpiLogLevel) -> HpiError {
    let mut builder = Builder::new();
    builder.filter_level(level.into());
    install(builder)
}

/// Initialize runtime logging from `RUST_LOG`, falling back to `default_level`.
///
/// # Safety
/// Must be called from a single thread during initialization.
#[no_mangle]
pub unsafe extern "C" fn hpi_logging_init_env(default_level: HpiLogLevel) -> HpiError {
    let filter: log::LevelFilter = default_level.into();
    init_with_default(&filter.to_string().to_ascii_lowercase())
}
