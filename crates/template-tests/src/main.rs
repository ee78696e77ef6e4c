//! Host test binary for the firmware template units.
//!
//! Registers the suite of every target in a fixed order and runs them with
//! the shared harness. Takes no arguments; exits 0 when every case passes and
//! 1 on the first failed assertion. Set `RUST_LOG=debug` to trace
//! registration.

use std::process::ExitCode;

use log::info;

mod suites;

fn main() -> ExitCode {
    env_logger::init();
    info!("Starting template unit tests");

    test_framework::run_suites(suites::ALL)
}
