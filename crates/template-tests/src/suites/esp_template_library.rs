use template_core::esp::TemplateLibrary;
use test_framework::{assert_eq_int, suite};

fn template_library_initializes_to_zero() {
    let mut obj = TemplateLibrary::new();
    obj.init();
    assert_eq_int!(0, obj.get());
    obj.set(5);
    assert_eq_int!(5, obj.get());
}

fn template_library_init_discards_value() {
    let mut obj = TemplateLibrary::new();
    obj.set(-12);
    obj.init();
    assert_eq_int!(0, obj.get());
}

fn template_library_repeated_set_is_stable() {
    let mut obj = TemplateLibrary::new();
    obj.set(i32::MAX);
    obj.set(i32::MAX);
    assert_eq_int!(i32::MAX, obj.get());
}

suite!(
    "esp_template_library_test_suite",
    [
        template_library_initializes_to_zero,
        template_library_init_discards_value,
        template_library_repeated_set_is_stable,
    ]
);
