#[macro_use]
mod common;

use std::io;

use common::*;

const EOF: Sentinel = Sentinel::new("EOF");

#[test]
fn question_mark_converts() {
    fn read() -> Result<()> {
        let _file = std::fs::File::open("/does/not/exist")?;
        Ok(())
    }

    fn parse() -> Result<u8> {
        Ok("300".parse::<u8>()?)
    }

    let err = read().unwrap_err();
    assert_eq!(err.kind(), Kind::External);
    assert_eq!(
        err.downcast_ref::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::NotFound)
    );
    assert!(parse().unwrap_err().is::<std::num::ParseIntError>());
}

#[test]
fn sentinel_survives_annotation() {
    fn read() -> Result<u8> {
        Err(EOF.into())
    }

    let err = read()
        .with_field("offset", 512)
        .wrap("read block")
        .unwrap_err();
    assert_eq!(err.to_string(), "read block: EOF");
    assert!(EOF.matches(&err));
    assert_eq!(err.downcast_ref::<Sentinel>(), Some(&Sentinel::new("EOF")));
    assert_eq!(
        unpack(Some(&err)).iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["EOF", "read block"]
    );
    assert!(!Sentinel::new("unexpected EOF").matches(&err));
}

#[test]
fn result_ext_on_io() {
    let result: std::result::Result<(), io::Error> =
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    let err = result
        .with_field("path", "/etc/shadow")
        .wrap("open failed")
        .unwrap_err();
    assert_eq!(err.to_string(), "open failed: denied");
    assert!(err.is::<io::Error>());
    assert_eq!(err.fields().get("path").and_then(Value::as_str), Some("/etc/shadow"));
}

#[cfg(feature = "log")]
#[test]
fn fields_as_log_source() {
    use log::kv::{self, Key, Source, VisitSource};

    struct Collect(Vec<(String, String)>);

    impl<'kvs> VisitSource<'kvs> for Collect {
        fn visit_pair(&mut self, key: Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
            self.0.push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    let err = new("denied").with_field("user", "alice").with_field("attempt", 3);
    let fields = err.fields();
    let mut collect = Collect(Vec::new());
    fields.visit(&mut collect).unwrap();
    assert_eq!(
        collect.0,
        [
            ("attempt".to_owned(), "3".to_owned()),
            ("user".to_owned(), "alice".to_owned())
        ]
    );
    assert_eq!(fields.count(), 2);
}
