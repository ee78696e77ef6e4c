use template_core::stm::TemplateLibrary;
use test_framework::{assert_eq_int, suite};

fn template_library_initializes_to_zero() {
    let mut obj = TemplateLibrary::new();
    obj.init();
    assert_eq_int!(0, obj.get());
    obj.set(7);
    assert_eq_int!(7, obj.get());
}

fn template_library_keeps_last_value() {
    let mut obj = TemplateLibrary::default();
    obj.set(3);
    obj.set(i32::MIN);
    assert_eq_int!(i32::MIN, obj.get());
}

suite!(
    "stm_template_library_test_suite",
    [
        template_library_initializes_to_zero,
        template_library_keeps_last_value,
    ]
);
