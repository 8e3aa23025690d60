#[test]
fn compile_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/basic.rs");
    t.pass("tests/pass/custom_name.rs");
    t.compile_fail("tests/fail/unknown_trailing_key.rs");
}
