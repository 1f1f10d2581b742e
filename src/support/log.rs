use log::kv::{self, Key, Source, ToValue, VisitSource};

use crate::fields::{Fields, Value};

#[cfg_attr(docsrs, doc(cfg(feature = "log")))]
impl ToValue for Value {
    fn to_value(&self) -> kv::Value<'_> {
        match self {
            Self::Bool(v) => kv::Value::from(*v),
            Self::Int(v) => kv::Value::from(*v),
            Self::Uint(v) => kv::Value::from(*v),
            Self::Float(v) => kv::Value::from(*v),
            Self::Str(v) => kv::Value::from(v.as_str()),
        }
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "log")))]
impl Source for Fields {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for (key, value) in self {
            visitor.visit_pair(Key::from_str(key), value.to_value())?;
        }
        Ok(())
    }

    fn get(&self, key: Key<'_>) -> Option<kv::Value<'_>> {
        Fields::get(self, key.as_str()).map(ToValue::to_value)
    }

    fn count(&self) -> usize {
        self.len()
    }
}
