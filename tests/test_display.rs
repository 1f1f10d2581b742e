#[macro_use]
mod common;

use common::*;

#[test]
fn description() {
    let err = io_error("disk full")
        .with_field("block", 7)
        .with_message("write failed")
        .with_stack()
        .with_message("save failed");
    assert_error_display_eq!(err, "{}", "save failed: write failed: disk full");
    assert_error_display_eq!(err, "{:?}", r#""save failed: write failed: disk full""#);
}

#[test]
fn description_of_fundamental() {
    assert_error_display_eq!(new("error"), "{}", "error");
    assert_error_display_eq!(new("error"), "{:?}", r#""error""#);
}

#[test]
fn verbose_without_stacks() {
    let err = io_error("disk full")
        .with_message("write failed")
        .with_fields([("block", Value::from(7)), ("device", Value::from("sda"))])
        .with_message("save failed");
    let expected = indoc! {"
        disk full
        write failed
          block: 7
          device: sda
        save failed"};
    assert_error_display_eq!(err, "{:#}", expected);
    assert_error_display_eq!(err, "{:#?}", expected);
}

#[test]
fn verbose_fields_in_key_order() {
    let err = io_error("root").with_fields([("b", 2), ("a", 1), ("c", 3)]);
    assert_error_display_eq!(err, "{:#}", "root\n  a: 1\n  b: 2\n  c: 3");
}

#[test]
fn verbose_empty_fields_add_nothing() {
    let err = io_error("root").with_fields(Fields::new());
    assert_eq!(err.kind(), Kind::WithFields);
    assert_error_display_eq!(err, "{:#}", "root");
}

#[test]
fn verbose_includes_stacks() {
    let err = new("disk full").wrap("write failed");
    let verbose = format!("{:#}", err);
    assert!(verbose.starts_with("disk full\n"));
    assert!(verbose.contains("\nwrite failed\n"));
    assert!(verbose.contains("test_display.rs"));
    assert!(verbose.find("disk full").unwrap() < verbose.find("write failed").unwrap());
}

#[test]
fn stack_display() {
    let err = new("root");
    let stack = err.stack().unwrap();
    let display = stack.to_string();
    assert!(display.starts_with('\n'));
    assert!(display.contains("test_display.rs"));
    assert!(stack.len() <= MAX_DEPTH);
}
