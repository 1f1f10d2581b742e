#[macro_use]
mod common;

use common::*;

#[test]
fn compare_every_pair() {
    let root = new("error");
    let values = [
        None,
        Some(root.clone()),
        Some(new("error")),
        Some(io_error("error")),
        wrap(root.clone(), "wrapped"),
        wrapf!(root.clone(), "wrapped {}", 1),
        with_message(root.clone(), "whoops"),
        with_stack(root.clone()),
        with_field(root.clone(), "k", "v"),
        with_fields(root.clone(), Fields::new()),
        cause(Some(&root)).cloned(),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            let equal = a == b;
            // Only the same node, or a clone of it, is equal.
            let expected = i == j || matches!((i, j), (1, 10) | (10, 1));
            assert_eq!(equal, expected, "values[{}] == values[{}]", i, j);
        }
    }
}

#[test]
fn clones_are_equal() {
    let err = new("error").wrap("outer");
    let clone = err.clone();
    assert_eq!(err, clone);
    assert_eq!(err.cause(), clone.cause());
}
