use mosaic_canvas::CanvasError;
use mosaic_encode::EncodeError;
use mosaic_value::ValueError;
use thiserror::Error;

/// Everything that can stop a value from becoming an SVG document.
#[derive(Error, Debug)]
pub enum MarshalError {
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("Value of type '{type_name}' could not be serialized: {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("Canvas failed: {0}")]
    Canvas(#[from] CanvasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
