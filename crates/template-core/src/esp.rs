//! ESP32 joystick template units

use log::trace;

use crate::unit::{FlagCell, IntoFlag, StatefulUnit, ValueCell};

/// Holds integer state for the ESP template library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateLibrary {
    value: ValueCell,
}

impl TemplateLibrary {
    /// Create an instance already in its default state.
    pub const fn new() -> Self {
        Self {
            value: ValueCell::new(),
        }
    }

    /// Reset the stored value to 0.
    pub fn init(&mut self) {
        self.value.init();
    }

    /// Store a new value.
    pub fn set(&mut self, value: i32) {
        trace!("esp template: value = {}", value);
        self.value.set(value);
    }

    /// Current stored value.
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

/// Holds enable-state for the ESP template library1 behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateLibrary1 {
    enabled: FlagCell,
}

impl TemplateLibrary1 {
    /// Create a disabled instance.
    pub const fn new() -> Self {
        Self {
            enabled: FlagCell::new(),
        }
    }

    /// Reset to disabled.
    pub fn init(&mut self) {
        self.enabled.init();
    }

    /// Enable on any nonzero input, disable on zero.
    pub fn enable(&mut self, enabled: impl IntoFlag) {
        self.enabled.set(enabled);
        trace!("esp template1: enabled = {}", self.enabled.get());
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl StatefulUnit for TemplateLibrary1 {
    type Input = i32;
    type Output = bool;

    fn init(&mut self) {
        TemplateLibrary1::init(self);
    }

    fn set(&mut self, input: i32) {
        self.enable(input);
    }

    fn get(&self) -> bool {
        self.is_enabled()
    }
}
