//! Jetson units, both in one suite.

use template_core::jetson::{TemplateLibrary, TemplateLibrary1};
use test_framework::{assert_eq_int, assert_true, suite};

fn template_library_new_defaults_to_zero() {
    let mut obj = TemplateLibrary::new();
    assert_eq_int!(0, obj.get());
    obj.set(-7);
    assert_eq_int!(-7, obj.get());
}

fn template_library1_new_defaults_to_disabled() {
    let mut obj = TemplateLibrary1::new();
    assert_true!(!obj.is_enabled());
    obj.set_enabled(true);
    assert_true!(obj.is_enabled());
}

suite!(
    "jetson_template_library_test_suite",
    [
        template_library_new_defaults_to_zero,
        template_library1_new_defaults_to_disabled,
    ]
);
