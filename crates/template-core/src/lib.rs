//! Hardware-independent template units for the firmware targets
//!
//! Each target (ESP32 joystick, STM Nucleo, Jetson companion) ships a pair of
//! placeholder "template library" units: one that stores an integer value and
//! one that tracks a single on/off flag. They are intentionally tiny and share
//! their storage through [`ValueCell`] and [`FlagCell`], while each target
//! keeps its own type and operation names.
//!
//! It is `#![no_std]` so it compiles on both embedded targets and desktop
//! hosts (for the test harness).

#![no_std]

pub mod esp;
pub mod jetson;
pub mod stm;
pub mod unit;

pub use unit::{FlagCell, IntoFlag, StatefulUnit, ValueCell};
