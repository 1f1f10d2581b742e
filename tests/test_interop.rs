#[macro_use]
mod common;

use common::*;

#[test]
fn into_anyhow() {
    let err = new("disk full").wrap("write failed");
    let any = anyhow::Error::new(err.clone());
    assert_eq!(any.to_string(), "write failed: disk full");
    assert_eq!(any.downcast_ref::<Error>(), Some(&err));
}

#[test]
fn from_anyhow_recovers_error() {
    let err = new("disk full");
    let any = anyhow::Error::new(err.clone());
    assert_eq!(Error::from(any), err);
}

#[test]
fn from_anyhow_keeps_context() {
    let root = new("disk full");
    let any = anyhow::Error::new(root.clone())
        .context("write failed")
        .context("save failed");
    let err = Error::from(any);
    assert_eq!(err.to_string(), "save failed: write failed: disk full");
    assert_eq!(err.root_cause(), &root);
    assert_eq!(
        err.unpack().iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["disk full", "write failed", "save failed"]
    );
}

#[test]
fn from_anyhow_wraps_foreign() {
    let any = anyhow::anyhow!("foreign");
    let err = Error::from(any);
    assert_eq!(err.kind(), Kind::External);
    assert_eq!(err.to_string(), "foreign");
}
