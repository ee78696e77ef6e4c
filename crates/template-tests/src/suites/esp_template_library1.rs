use template_core::esp::TemplateLibrary1;
use test_framework::{assert_eq_int, assert_true, suite};

fn template_library1_initializes_disabled() {
    let mut obj = TemplateLibrary1::new();
    obj.init();
    assert_eq_int!(0, obj.is_enabled());
    obj.enable(1);
    assert_eq_int!(1, obj.is_enabled());
}

/// Any nonzero input enables, and reads back as the canonical `true`.
fn template_library1_normalizes_nonzero() {
    let mut obj = TemplateLibrary1::new();
    obj.enable(42);
    assert_eq_int!(1, obj.is_enabled());
    obj.enable(-1);
    assert_true!(obj.is_enabled());
    obj.enable(0);
    assert_true!(!obj.is_enabled());
}

suite!(
    "esp_template_library1_test_suite",
    [
        template_library1_initializes_disabled,
        template_library1_normalizes_nonzero,
    ]
);
