//! Self-registering unit-test harness for the firmware template targets
//!
//! The harness keeps the contract of the on-target C test runner: one line
//! per case before and after it runs, a summary line at the end, and a
//! process exit on the very first failed assertion.
//!
//! Registration is explicit. Every suite module declares its cases with
//! [`suite!`], which generates a `register` function, and the entry point
//! hands those functions to [`run_suites`] in a fixed order:
//!
//! ```ignore
//! mod esp_suite {
//!     use test_framework::{assert_eq_int, suite};
//!
//!     fn initializes_to_zero() {
//!         assert_eq_int!(0, 0);
//!     }
//!
//!     suite!("esp_suite", [initializes_to_zero]);
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     test_framework::run_suites(&[esp_suite::register])
//! }
//! ```

pub mod config;
pub mod failure;
pub mod registry;
pub mod runner;

use std::process::ExitCode;

use log::debug;

pub use config::HarnessConfig;
pub use failure::{FAILURE_EXIT_CODE, Failure, FailureKind, Location, abort, fail};
pub use registry::{MAX_TESTS, Registry, RegistryError, TestCase, TestFn};
pub use runner::{RunSummary, Runner};

/// Suite registration hook, as generated by [`suite!`].
pub type RegisterFn = fn(&mut Registry);

/// Declare the cases of a suite.
///
/// Expands to `pub fn register(registry: &mut Registry)` that registers each
/// listed function under its own identifier, in the order given.
#[macro_export]
macro_rules! suite {
    ($suite:expr, [$($case:ident),* $(,)?]) => {
        /// Register every case of this suite, in declaration order.
        pub fn register(registry: &mut $crate::Registry) {
            $(
                registry.register($suite, ::core::stringify!($case), $case);
            )*
        }
    };
}

/// Process entry point: register every suite, then run them all.
///
/// Returns success once every case has passed. Failed assertions and registry
/// overflow never return here; they exit the process with
/// [`FAILURE_EXIT_CODE`].
pub fn run_suites(suites: &[RegisterFn]) -> ExitCode {
    let mut registry: Registry = Registry::new();
    for register in suites {
        register(&mut registry);
    }
    debug!(
        "Registered {} case(s) from {} suite(s)",
        registry.len(),
        suites.len()
    );

    let runner = Runner::new(HarnessConfig::from_env());
    match runner.run(&registry) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write test output: {}", e);
            ExitCode::FAILURE
        }
    }
}
