//! STM Nucleo template units

use log::trace;

use crate::unit::{FlagCell, IntoFlag, StatefulUnit, ValueCell};

/// Holds integer state for the STM template library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateLibrary {
    value: ValueCell,
}

impl TemplateLibrary {
    pub const fn new() -> Self {
        Self {
            value: ValueCell::new(),
        }
    }

    pub fn init(&mut self) {
        self.value.init();
    }

    pub fn set(&mut self, value: i32) {
        trace!("stm template: value = {}", value);
        self.value.set(value);
    }

    pub const fn get(&self) -> i32 {
        self.value.get()
    }
}

impl StatefulUnit for TemplateLibrary {
    type Input = i32;
    type Output = i32;

    fn init(&mut self) {
        TemplateLibrary::init(self);
    }

    fn set(&mut self, input: i32) {
        TemplateLibrary::set(self, input);
    }

    fn get(&self) -> i32 {
        TemplateLibrary::get(self)
    }
}

/// Holds readiness state for the STM template library1 behavior.
///
/// Starts not-ready; [`TemplateLibrary1::set_ready`] treats any nonzero
/// input as ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateLibrary1 {
    ready: FlagCell,
}

impl TemplateLibrary1 {
    pub const fn new() -> Self {
        Self {
            ready: FlagCell::new(),
        }
    }

    /// Reset to not-ready.
    pub fn init(&mut self) {
        self.ready.init();
    }

    pub fn set_ready(&mut self, ready: impl IntoFlag) {
        self.ready.set(ready);
        trace!("stm template1: ready = {}", self.ready.get());
    }

    pub const fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

impl StatefulUnit for TemplateLibrary1 {
    type Input = i32;
    type Output = bool;

    fn init(&mut self) {
        TemplateLibrary1::init(self);
    }

    fn set(&mut self, input: i32) {
        self.set_ready(input);
    }

    fn get(&self) -> bool {
        self.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_initializes_to_zero() {
        let mut obj = TemplateLibrary::default();
        obj.init();
        assert_eq!(obj.get(), 0);
        obj.set(7);
        assert_eq!(obj.get(), 7);
    }

    #[test]
    fn test_ready_transition() {
        let mut obj = TemplateLibrary1::new();
        obj.init();
        assert!(!obj.is_ready());

        obj.set_ready(1);
        assert!(obj.is_ready());

        obj.set_ready(0);
        assert!(!obj.is_ready());
    }
}
