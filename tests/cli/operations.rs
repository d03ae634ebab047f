//! Tests for operations other than `get`.

use crate::support::*;

#[test]
fn test_store_is_ignored() {
    let t = Test::with_store(".authinfo", ALICE_LINE);

    let request = "protocol=https\nhost=example.com\nusername=alice\npassword=new\n\n";
    let output = t.operation("store", request);
    assert_success(&output);
    assert_stdout_empty(&output);

    // The store file is untouched.
    let contents = std::fs::read_to_string(t.home.path().join(".authinfo")).unwrap();
    assert_eq!(contents, ALICE_LINE);
}

#[test]
fn test_erase_is_ignored() {
    let t = Test::with_store(".authinfo", ALICE_LINE);

    let output = t.operation("erase", REQUEST);
    assert_success(&output);
    assert_stdout_empty(&output);

    let contents = std::fs::read_to_string(t.home.path().join(".authinfo")).unwrap();
    assert_eq!(contents, ALICE_LINE);
}

#[test]
fn test_unknown_operation_is_ignored() {
    let t = Test::with_store(".authinfo", ALICE_LINE);

    let output = t.operation("capability", REQUEST);
    assert_success(&output);
    assert_stdout_empty(&output);
}

#[test]
fn test_ignored_operation_skips_broken_store() {
    let t = Test::with_store(".authinfo", FIVE_TOKEN_LINE);

    let output = t.operation("store", REQUEST);
    assert_success(&output);
}
