//! Shared single-field storage behind every template unit.

use core::fmt::Debug;

/// Common init / set / get contract implemented by every template unit.
///
/// Lets tests check the "query after set" and "query after init" properties
/// once for every target instead of once per type.
pub trait StatefulUnit: Default {
    /// Value accepted by [`StatefulUnit::set`].
    type Input;
    /// Canonical value returned by [`StatefulUnit::get`].
    type Output: Copy + PartialEq + Debug;

    /// Reset the unit to its default state.
    fn init(&mut self);

    /// Overwrite the stored field.
    fn set(&mut self, input: Self::Input);

    /// Read the stored field.
    fn get(&self) -> Self::Output;
}

/// Conversion into a canonical flag, where any nonzero value means `true`.
pub trait IntoFlag {
    fn into_flag(self) -> bool;
}

impl IntoFlag for bool {
    fn into_flag(self) -> bool {
        self
    }
}

macro_rules! impl_into_flag {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFlag for $ty {
                fn into_flag(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_into_flag!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Integer storage, zero until set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueCell {
    value: i32,
}

impl ValueCell {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    pub fn init(&mut self) {
        self.value = 0;
    }

    pub fn set(&mut self, value: i32) {
        self.value = value;
    }

    pub const fn get(&self) -> i32 {
        self.value
    }
}

/// Flag storage, cleared until raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagCell {
    raised: bool,
}

impl FlagCell {
    pub const fn new() -> Self {
        Self { raised: false }
    }

    pub fn init(&mut self) {
        self.raised = false;
    }

    /// Store the flag; nonzero inputs are normalized to `true`.
    pub fn set(&mut self, flag: impl IntoFlag) {
        self.raised = flag.into_flag();
    }

    pub const fn get(&self) -> bool {
        self.raised
    }
}
