use template_core::stm::TemplateLibrary1;
use test_framework::{assert_eq_int, assert_true, suite};

fn template_library1_initializes_not_ready() {
    let mut obj = TemplateLibrary1::new();
    obj.init();
    assert_eq_int!(0, obj.is_ready());
    obj.set_ready(1);
    assert_eq_int!(1, obj.is_ready());
}

fn template_library1_ready_can_be_cleared() {
    let mut obj = TemplateLibrary1::new();
    obj.set_ready(255u8);
    assert_true!(obj.is_ready());
    obj.set_ready(false);
    assert_true!(!obj.is_ready());
}

suite!(
    "stm_template_library1_test_suite",
    [
        template_library1_initializes_not_ready,
        template_library1_ready_can_be_cleared,
    ]
);
