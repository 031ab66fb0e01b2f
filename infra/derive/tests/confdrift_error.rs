#[test]
fn confdrift_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/confdrift_error_pass.rs");
    t.pass("tests/ui/confdrift_error_cfg_variant.rs");
}
