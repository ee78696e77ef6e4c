//! Sequential test runner

use std::io::{self, Write};

use log::{debug, info};

use crate::config::HarnessConfig;
use crate::registry::Registry;

/// Outcome of a run that reached the end of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of cases executed
    pub executed: usize,
}

/// Runs every registered case in registration order.
///
/// Output is line oriented and stable so CI tooling can scrape it:
///
/// ```text
///   [RUN] Case: [<name>]
///   [OK ] Case: [<name>]
/// Ran <n> test(s)
/// ```
///
/// A failing case terminates the process from inside its body, so the runner
/// only ever observes passing cases.
pub struct Runner {
    config: HarnessConfig,
}

impl Runner {
    pub const fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Run to stdout.
    pub fn run<const N: usize>(&self, registry: &Registry<N>) -> io::Result<RunSummary> {
        self.run_to(registry, &mut io::stdout())
    }

    /// Run, writing the per-case and summary lines to `out`.
    pub fn run_to<W: Write, const N: usize>(
        &self,
        registry: &Registry<N>,
        out: &mut W,
    ) -> io::Result<RunSummary> {
        info!("Running {} registered test case(s)", registry.len());

        let mut executed = 0;
        for case in registry.iter() {
            writeln!(out, "  {} Case: [{}]", self.config.run_tag(), case.name())?;
            // The RUN line must be visible before a failure report on stderr.
            out.flush()?;

            debug!("Entering {}::{}", case.suite(), case.name());
            case.run();
            executed += 1;

            writeln!(out, "  {} Case: [{}]", self.config.ok_tag(), case.name())?;
        }

        writeln!(out, "Ran {} test(s)", executed)?;
        out.flush()?;

        info!("Run finished, {} case(s) passed", executed);
        Ok(RunSummary { executed })
    }
}
