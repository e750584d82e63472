// SPDX-License-Identifier: MPL-2.0

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}
