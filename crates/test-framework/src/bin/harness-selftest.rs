//! Fixture runs of the harness itself.
//!
//! Each scenario is a small, fixed set of suites whose exit status and output
//! the framework's integration tests check.
//!
//! | Scenario      | Behaviour                                        |
//! |---------------|--------------------------------------------------|
//! | `pass`        | three passing cases                              |
//! | `fail-fast`   | second of three cases fails an integer assertion |
//! | `assert-true` | single case fails a boolean assertion            |
//! | `empty`       | no cases registered                              |
//! | `overflow`    | one more case than the registry can hold         |

use std::process::ExitCode;

use log::info;
use test_framework::{MAX_TESTS, RegisterFn, Registry, run_suites};

mod passing {
    use test_framework::{assert_eq_int, assert_true, suite};

    fn first_passes() {
        assert_true!(true);
    }

    fn second_passes() {
        assert_eq_int!(2, 1 + 1);
    }

    fn third_passes() {
        assert_eq_int!(0, false);
    }

    suite!("passing_suite", [first_passes, second_passes, third_passes]);
}

mod fail_fast {
    use test_framework::{assert_eq_int, suite};

    fn case_a() {
        assert_eq_int!(1, 1);
    }

    fn case_b() {
        assert_eq_int!(3, 4);
    }

    fn case_c() {
        println!("case_c body executed");
    }

    suite!("fail_fast_suite", [case_a, case_b, case_c]);
}

mod assert_true_fails {
    use test_framework::{assert_true, suite};

    fn ready_flag_is_set() {
        let ready = false;
        assert_true!(ready);
    }

    suite!("assert_true_suite", [ready_flag_is_set]);
}

fn noop() {}

fn register_past_capacity(registry: &mut Registry) {
    for _ in 0..=MAX_TESTS {
        registry.register("overflow_suite", "noop", noop);
    }
}

const SCENARIOS: &[(&str, &[RegisterFn])] = &[
    ("pass", &[passing::register]),
    ("fail-fast", &[fail_fast::register]),
    ("assert-true", &[assert_true_fails::register]),
    ("empty", &[]),
    ("overflow", &[register_past_capacity]),
];

fn scenario(name: &str) -> Option<&'static [RegisterFn]> {
    SCENARIOS
        .iter()
        .find(|(scenario, _)| *scenario == name)
        .map(|(_, suites)| *suites)
}

fn main() -> ExitCode {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_default();
    let Some(suites) = scenario(&name) else {
        eprintln!("usage: harness-selftest <pass|fail-fast|assert-true|empty|overflow>");
        return ExitCode::from(2);
    };

    info!("Running selftest scenario {:?}", name);
    run_suites(suites)
}
