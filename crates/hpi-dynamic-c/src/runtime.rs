// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide runtime configuration.

use std::os::raw::c_char;
use std::sync::OnceLock;

use hpi_dynamic::fatal;
use hpi_dynamic::{RuntimeConfig, RuntimeError};

use super::{logging, str_arg, HpiError};

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
static DEFAULTS: OnceLock<RuntimeConfig> = OnceLock::new();

/// Installed configuration, or the defaults while none is installed.
///
/// Reading never installs anything, so a later `hpi_runtime_init` still
/// takes effect.
pub(crate) fn config() -> &'static RuntimeConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULTS.get_or_init(RuntimeConfig::default))
}

fn install(config: RuntimeConfig) -> HpiError {
    let log_level = config.log_level.to_ascii_lowercase();
    if CONFIG.set(config).is_err() {
        log::warn!("[runtime] configuration already installed, keeping the first one");
        return HpiError::HpiAlreadyInitialized;
    }
    if logging::init_with_default(&log_level) == HpiError::HpiAlreadyInitialized {
        log::debug!("[runtime] logger set up by the host, log_level {} not applied", log_level);
    }
    HpiError::HpiOk
}

/// Print the diagnostic for `err` and terminate with the configured status.
pub(crate) fn die(err: &RuntimeError) -> ! {
    fatal::exit_with(err, config().fatal_exit_code)
}

/// Initialize the runtime from the environment.
///
/// Loads the TOML file named by `HPI_RUNTIME_CONFIG` if set, otherwise the
/// defaults, and initializes logging with the configured level (`RUST_LOG`
/// takes precedence). Call once at the start of `main`.
///
/// # Safety
/// Must be called from a single thread during initialization.
///
/// # Returns
/// `HpiError::HpiOk` on success, `HpiError::HpiConfigError` if the file cannot
/// be loaded, `HpiError::HpiAlreadyInitialized` on a second call
#[no_mangle]
pub unsafe extern "C" fn hpi_runtime_init() -> HpiError {
    match RuntimeConfig::from_env() {
        Ok(config) => install(config),
        Err(e) => {
            log::error!("[runtime] {}", e);
            HpiError::HpiConfigError
        }
    }
}

/// Initialize the runtime from an explicit TOML file.
///
/// # Safety
/// - `path` must be a valid null-terminated C string.
///
/// # Returns
/// `HpiError::HpiOk` on success
///
/// # Example (C)
/// ```c
/// hpi_runtime_configure("/etc/hpi/runtime.toml");
/// ```
#[no_mangle]
pub unsafe extern "C" fn hpi_runtime_configure(path: *const c_char) -> HpiError {
    let Some(path) = str_arg(path) else {
        return HpiError::HpiInvalidArgument;
    };
    match RuntimeConfig::from_file(path) {
        Ok(config) => install(config),
        Err(e) => {
            log::error!("[runtime] {}: {}", path, e);
            HpiError::HpiConfigError
        }
    }
}
