//! Ordered, bounded registry of test cases.

use heapless::Vec;
use log::debug;
use thiserror_no_std::Error;

use crate::failure;

/// Default registry capacity.
pub const MAX_TESTS: usize = 1024;

/// Zero-argument test body. Failure is signalled by a fatal assertion.
pub type TestFn = fn();

/// One registered test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    suite: &'static str,
    name: &'static str,
    body: TestFn,
}

impl TestCase {
    pub const fn suite(&self) -> &'static str {
        self.suite
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Execute the test body.
    pub fn run(&self) {
        (self.body)()
    }
}

/// Error types for registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Every slot is already taken
    #[error("Too many tests registered (max={max})")]
    CapacityExceeded {
        /// Registry capacity
        max: usize,
    },
}

/// Append-only collection of test cases, iterated in registration order.
///
/// Built once by the entry point, filled by the suite registrars and then
/// only read by the runner.
pub struct Registry<const N: usize = MAX_TESTS> {
    cases: Vec<TestCase, N>,
}

impl<const N: usize> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Registry<N> {
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a test case, or report that the registry is full.
    pub fn try_register(
        &mut self,
        suite: &'static str,
        name: &'static str,
        body: TestFn,
    ) -> Result<(), RegistryError> {
        self.cases
            .push(TestCase { suite, name, body })
            .map_err(|_| RegistryError::CapacityExceeded { max: N })?;
        debug!("Registered {}::{} (#{})", suite, name, self.cases.len());
        Ok(())
    }

    /// Append a test case.
    ///
    /// Overflowing the registry is a build misconfiguration, so it aborts the
    /// process with exit status 1 instead of returning.
    pub fn register(&mut self, suite: &'static str, name: &'static str, body: TestFn) {
        if let Err(e) = self.try_register(suite, name, body) {
            failure::abort(e);
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Registered cases in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() {}

    #[test]
    fn test_preserves_registration_order() {
        let mut registry = Registry::<4>::new();
        registry.register("suite_a", "first", noop);
        registry.register("suite_b", "second", noop);
        registry.register("suite_a", "third", noop);

        let names: std::vec::Vec<_> = registry
            .iter()
            .map(|case| (case.suite(), case.name()))
            .collect();
        assert_eq!(
            names,
            [("suite_a", "first"), ("suite_b", "second"), ("suite_a", "third")]
        );
    }

    #[test]
    fn test_rejects_past_capacity() {
        let mut registry = Registry::<2>::new();
        assert!(registry.try_register("s", "a", noop).is_ok());
        assert!(registry.try_register("s", "b", noop).is_ok());

        assert_eq!(
            registry.try_register("s", "c", noop),
            Err(RegistryError::CapacityExceeded { max: 2 })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_capacity_message() {
        let err = RegistryError::CapacityExceeded { max: MAX_TESTS };
        assert_eq!(err.to_string(), "Too many tests registered (max=1024)");
    }

    #[test]
    fn test_starts_empty() {
        let registry: Registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.capacity(), MAX_TESTS);
        assert_eq!(registry.iter().count(), 0);
    }
}
