//! One suite per template unit, grouped by target.

use test_framework::RegisterFn;

mod esp_template_library;
mod esp_template_library1;
mod jetson_template_library;
mod stm_template_library;
mod stm_template_library1;

/// Every suite, in run order.
pub const ALL: &[RegisterFn] = &[
    esp_template_library::register,
    esp_template_library1::register,
    stm_template_library::register,
    stm_template_library1::register,
    jetson_template_library::register,
];
