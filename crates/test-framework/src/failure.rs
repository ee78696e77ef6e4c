//! Fatal assertion reporting
//!
//! A failed assertion is not an error value handed back to the runner. It is
//! reported once on stderr and the process exits immediately, so no case
//! after the failing one ever runs.

use core::fmt;
use std::io::{self, Write};
use std::process;

use log::debug;

use crate::config::HarnessConfig;

/// Exit status used for every fatal report.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Source position of a failed assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Which assertion failed, with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// `assert_true!` saw a false expression
    AssertTrue {
        /// Source text of the expression
        expr: &'static str,
    },
    /// `assert_eq_int!` saw two different integers
    AssertEqInt { expected: i64, actual: i64 },
}

/// A failed assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub location: Location,
}

impl Failure {
    pub const fn assert_true(expr: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            kind: FailureKind::AssertTrue { expr },
            location: Location { file, line },
        }
    }

    pub const fn assert_eq_int(expected: i64, actual: i64, file: &'static str, line: u32) -> Self {
        Self {
            kind: FailureKind::AssertEqInt { expected, actual },
            location: Location { file, line },
        }
    }

    /// Write the `[FAIL]` line for this failure.
    pub fn report<W: Write>(&self, out: &mut W, config: &HarnessConfig) -> io::Result<()> {
        writeln!(out, "  {} {}", config.fail_tag(), self)?;
        out.flush()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::AssertTrue { expr } => {
                write!(f, "ASSERT_TRUE failed at {} ({})", self.location, expr)
            }
            FailureKind::AssertEqInt { expected, actual } => write!(
                f,
                "ASSERT_EQ_INT failed at {} (expected={}, actual={})",
                self.location, expected, actual
            ),
        }
    }
}

/// Report a failed assertion on stderr and terminate the process.
pub fn fail(failure: Failure) -> ! {
    debug!("Fatal assertion: {:?}", failure);
    let config = HarnessConfig::from_env();
    // Nothing left to do if stderr is gone; the exit status still carries the failure.
    let _ = failure.report(&mut io::stderr(), &config);
    process::exit(FAILURE_EXIT_CODE)
}

/// Print a harness diagnostic on stderr and terminate the process.
pub fn abort(message: impl fmt::Display) -> ! {
    debug!("Harness abort: {}", message);
    eprintln!("{}", message);
    process::exit(FAILURE_EXIT_CODE)
}

/// Fail unless the expression is true.
///
/// The failure line carries the expression text and source position.
#[macro_export]
macro_rules! assert_true {
    ($expr:expr $(,)?) => {
        if !($expr) {
            $crate::fail($crate::Failure::assert_true(
                ::core::stringify!($expr),
                ::core::file!(),
                ::core::line!(),
            ));
        }
    };
}

/// Fail unless two integer expressions are equal.
///
/// Both sides are evaluated exactly once and widened to `i64`, so any
/// integer type up to 32 bits (and `bool`) can be compared.
#[macro_export]
macro_rules! assert_eq_int {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected: i64 = ::core::convert::Into::into($expected);
        let actual: i64 = ::core::convert::Into::into($actual);
        if expected != actual {
            $crate::fail($crate::Failure::assert_eq_int(
                expected,
                actual,
                ::core::file!(),
                ::core::line!(),
            ));
        }
    }};
}
