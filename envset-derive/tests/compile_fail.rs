//! Compile-fail tests to verify error messages
//!
//! These tests ensure that invalid `#[env(...)]` attributes produce clear,
//! helpful error messages instead of confusing errors in generated code.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
