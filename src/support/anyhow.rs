use crate::error::Error;

/// Recovers an [`Error`] carried by the `anyhow` error, keeping any context
/// layered over it as message annotations. Other errors are boxed as is.
#[cfg_attr(docsrs, doc(cfg(feature = "anyhow")))]
impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        let mut contexts = Vec::new();
        for layer in error.chain() {
            if let Some(inner) = layer.downcast_ref::<Error>() {
                return contexts
                    .into_iter()
                    .rev()
                    .fold(inner.clone(), Error::annotate_message);
            }
            contexts.push(layer.to_string());
        }
        Self::from_boxed(error.into())
    }
}
