use std::process::Command;

#[test]
fn test_all_template_suites_pass() {
    let output = Command::new(env!("CARGO_BIN_EXE_template-tests"))
        .env("NO_COLOR", "1")
        .env_remove("HARNESS_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn template-tests");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stdout:\n{stdout}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.last(), Some(&"Ran 11 test(s)"));

    // Every case is bracketed by its own RUN and OK lines.
    let cases = &lines[..lines.len() - 1];
    assert_eq!(cases.len(), 22);
    for pair in cases.chunks(2) {
        let name = pair[0]
            .strip_prefix("  [RUN] Case: ")
            .expect("RUN line first");
        assert_eq!(pair[1], format!("  [OK ] Case: {name}"));
    }
}

#[test]
fn test_suites_run_in_registration_order() {
    let output = Command::new(env!("CARGO_BIN_EXE_template-tests"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn template-tests");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let position = |case: &str| {
        stdout
            .find(&format!("[RUN] Case: [{case}]"))
            .unwrap_or_else(|| panic!("{case} missing from output"))
    };

    assert!(
        position("template_library_initializes_to_zero")
            < position("template_library1_initializes_disabled")
    );
    assert!(
        position("template_library1_initializes_disabled")
            < position("template_library1_initializes_not_ready")
    );
    assert!(
        position("template_library1_initializes_not_ready")
            < position("template_library1_new_defaults_to_disabled")
    );
}
