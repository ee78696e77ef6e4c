//! Jetson companion-board template units
//!
//! Unlike the microcontroller targets these take native `bool` flags; there
//! is no C-style integer flag to normalize on this side.

use crate::unit::{FlagCell, StatefulUnit, ValueCell};

/// Stores integer state for the primary Jetson template library.
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

    pub fn set(&mut self, value: i32) {
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
        self.value.init();
    }

    fn set(&mut self, input: i32) {
        TemplateLibrary::set(self, input);
    }

    fn get(&self) -> i32 {
        TemplateLibrary::get(self)
    }
}

/// Stores enable-state for the secondary Jetson template library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateLibrary1 {
    enabled: FlagCell,
}

impl TemplateLibrary1 {
    pub const fn new() -> Self {
        Self {
            enabled: FlagCell::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl StatefulUnit for TemplateLibrary1 {
    type Input = bool;
    type Output = bool;

    fn init(&mut self) {
        self.enabled.init();
    }

    fn set(&mut self, input: bool) {
        self.set_enabled(input);
    }

    fn get(&self) -> bool {
        self.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_zero() {
        assert_eq!(TemplateLibrary::new().get(), 0);
    }

    #[test]
    fn test_set_accepts_negative_values() {
        let mut obj = TemplateLibrary::new();
        obj.set(-7);
        assert_eq!(obj.get(), -7);
    }

    #[test]
    fn test_new_defaults_to_disabled() {
        assert!(!TemplateLibrary1::new().is_enabled());
    }

    #[test]
    fn test_set_enabled_updates_state() {
        let mut obj = TemplateLibrary1::new();
        obj.set_enabled(true);
        assert!(obj.is_enabled());
        obj.set_enabled(false);
        assert!(!obj.is_enabled());
    }
}
