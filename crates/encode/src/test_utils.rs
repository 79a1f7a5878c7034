use crate::config::EncoderConfig;
use crate::dispatch::DispatchCache;
use crate::walker::Walker;
use mosaic_canvas::SvgDocument;
use mosaic_value::Value;
use std::sync::Arc;

/// A walker with default settings and a cache no other test touches.
pub fn isolated_walker() -> Walker {
    Walker::new(EncoderConfig::default()).with_cache(Arc::new(DispatchCache::new()))
}

pub fn render(value: &Value, side: f64) -> SvgDocument {
    isolated_walker()
        .render(value, side)
        .unwrap_or_else(|e| panic!("rendering {:?} failed: {}", value, e))
}
