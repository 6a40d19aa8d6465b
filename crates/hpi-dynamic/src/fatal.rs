// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fatal error boundary.
//!
//! Generated programs have no way to recover from a failed JSON parse or a
//! rejected cast: the runtime prints the diagnostic line on stdout and ends
//! the process. Library code returns [`RuntimeError`]; only this module exits.

use crate::RuntimeError;
use std::io::{self, Write};

/// Exit status used when none is configured.
pub const DEFAULT_EXIT_CODE: i32 = -1;

/// Write the diagnostic line for `err`, newline included.
pub fn write_diagnostic<W: Write>(out: &mut W, err: &RuntimeError) -> io::Result<()> {
    writeln!(out, "{}", err)?;
    out.flush()
}

/// Print the diagnostic for `err` and terminate with `code`.
pub fn exit_with(err: &RuntimeError, code: i32) -> ! {
    log::debug!("[fatal] terminating with status {}: {:?}", code, err);
    let mut stdout = io::stdout().lock();
    // Nothing left to report to if stdout is gone.
    let _ = write_diagnostic(&mut stdout, err);
    drop(stdout);
    std::process::exit(code)
}

/// Turn a runtime result into its value or a fatal exit.
pub trait OrExit<T> {
    /// Exit with [`DEFAULT_EXIT_CODE`] on error.
    fn or_exit(self) -> T;

    /// Exit with `code` on error.
    fn or_exit_with(self, code: i32) -> T;
}

impl<T> OrExit<T> for Result<T, RuntimeError> {
    fn or_exit(self) -> T {
        self.or_exit_with(DEFAULT_EXIT_CODE)
    }

    fn or_exit_with(self, code: i32) -> T {
        match self {
            Ok(value) => value,
            Err(err) => exit_with(&err, code),
        }
    }
}
