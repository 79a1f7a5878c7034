use crate::error::MarshalError;
use mosaic_encode::{DispatchCache, EncodeError, EncoderConfig, Walker};
use mosaic_value::{Value, to_value};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Reusable entry point holding an encoder configuration and a dispatch cache.
///
/// Cloning is cheap and clones share the cache.
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    walker: Walker,
}

impl Marshaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: EncoderConfig) -> Self {
        let cache = Arc::clone(self.walker.cache());
        Self {
            walker: Walker::new(config).with_cache(cache),
        }
    }

    /// Replaces the process-wide dispatch cache with `cache`.
    pub fn with_cache(self, cache: Arc<DispatchCache>) -> Self {
        Self {
            walker: self.walker.with_cache(cache),
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        self.walker.config()
    }

    pub fn cache(&self) -> &Arc<DispatchCache> {
        self.walker.cache()
    }

    pub fn marshal<T>(&self, value: &T, size: f64) -> Result<Vec<u8>, MarshalError>
    where
        T: Serialize + ?Sized,
    {
        check_size(size)?;
        let value = convert(value)?;
        self.marshal_value(&value, size)
    }

    pub fn marshal_value(&self, value: &Value, size: f64) -> Result<Vec<u8>, MarshalError> {
        let document = self.walker.render(value, size)?;
        Ok(document.to_bytes()?)
    }

    /// Renders `value` and streams the document into `writer`.
    ///
    /// Nothing is written unless the whole value encoded successfully.
    pub fn marshal_to_writer<T, W>(&self, value: &T, size: f64, writer: W) -> Result<(), MarshalError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        check_size(size)?;
        let value = convert(value)?;
        let document = self.walker.render(&value, size)?;
        document.write_to(writer)?;
        Ok(())
    }

    /// Renders every value independently. Results are in input order.
    #[cfg(feature = "rayon")]
    pub fn marshal_batch<T>(&self, values: &[T], size: f64) -> Vec<Result<Vec<u8>, MarshalError>>
    where
        T: Serialize + Sync,
    {
        log::debug!("Marshalling a batch of {} values in parallel", values.len());
        values.par_iter().map(|value| self.marshal(value, size)).collect()
    }

    /// Renders every value independently. Results are in input order.
    #[cfg(not(feature = "rayon"))]
    pub fn marshal_batch<T>(&self, values: &[T], size: f64) -> Vec<Result<Vec<u8>, MarshalError>>
    where
        T: Serialize + Sync,
    {
        values.iter().map(|value| self.marshal(value, size)).collect()
    }
}

fn check_size(size: f64) -> Result<(), EncodeError> {
    if size > 0.0 && size.is_finite() {
        Ok(())
    } else {
        Err(EncodeError::InvalidSize(size))
    }
}

fn convert<T>(value: &T) -> Result<Value, MarshalError>
where
    T: Serialize + ?Sized,
{
    to_value(value).map_err(|source| MarshalError::Serialize {
        type_name: std::any::type_name::<T>(),
        source,
    })
}
