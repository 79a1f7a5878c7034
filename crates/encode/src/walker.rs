use crate::config::EncoderConfig;
use crate::dispatch::DispatchCache;
use crate::error::EncodeError;
use crate::region::Region;
use mosaic_canvas::SvgDocument;
use mosaic_value::Value;
use std::sync::Arc;

/// The single entry point of the recursion.
///
/// A walker is immutable and can be shared between threads; every call works on
/// its own region tree, and the only state the calls have in common is the
/// dispatch cache.
#[derive(Debug, Clone)]
pub struct Walker {
    cache: Arc<DispatchCache>,
    config: EncoderConfig,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl Walker {
    /// A walker backed by the process-wide dispatch cache.
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            cache: DispatchCache::global(),
            config,
        }
    }

    pub fn with_cache(mut self, cache: Arc<DispatchCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<DispatchCache> {
        &self.cache
    }

    /// Renders `value` into a fresh `size` × `size` document.
    ///
    /// The size is checked before the document is created.
    pub fn render(&self, value: &Value, size: f64) -> Result<SvgDocument, EncodeError> {
        check_side(size)?;
        let mut document = SvgDocument::new(size, size)?;
        {
            let mut region = Region::root(&mut document, size);
            self.encode(value, &mut region)?;
        }
        Ok(document)
    }

    /// Draws `value` into `region`.
    ///
    /// Errors from nested values are returned unchanged. Whatever was drawn
    /// before the failure stays on the surface.
    pub fn encode(&self, value: &Value, region: &mut Region<'_>) -> Result<(), EncodeError> {
        check_side(region.side())?;
        self.check_depth(region)?;
        if let Value::Float { value: v, .. } = value {
            if !v.is_finite() {
                return Err(EncodeError::InvalidValue {
                    descriptor: value.descriptor(),
                    reason: format!("{} has no drawable magnitude", v),
                });
            }
        }

        let descriptor = value.descriptor();
        let strategy = self.cache.resolve(&descriptor)?;
        log::trace!(
            "Encoding '{}' with the {} strategy at depth {}",
            descriptor,
            strategy.name(),
            region.depth()
        );
        strategy.encode(self, value, region)
    }

    pub(crate) fn check_depth(&self, region: &Region<'_>) -> Result<(), EncodeError> {
        if region.depth() > self.config.max_depth {
            return Err(EncodeError::DepthExceeded(self.config.max_depth));
        }
        Ok(())
    }
}

fn check_side(side: f64) -> Result<(), EncodeError> {
    if side > 0.0 && side.is_finite() {
        Ok(())
    } else {
        Err(EncodeError::InvalidSize(side))
    }
}
