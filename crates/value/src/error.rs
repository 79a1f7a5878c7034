use std::fmt::Display;
use thiserror::Error;

/// Errors raised while converting a `Serialize` type into a [`crate::Value`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("{0}")]
    Custom(String),
    #[error("Map value serialized before its key")]
    MissingKey,
    #[error("Map key serialized without a value")]
    MissingValue,
}

impl serde::ser::Error for ValueError {
    fn custom<T: Display>(msg: T) -> Self {
        ValueError::Custom(msg.to_string())
    }
}
