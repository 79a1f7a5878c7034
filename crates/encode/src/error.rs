use mosaic_canvas::CanvasError;
use mosaic_value::TypeDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid size {0}: a drawing region needs a positive, finite side.")]
    InvalidSize(f64),
    #[error("Value of type '{descriptor}' cannot be encoded: {reason}")]
    InvalidValue {
        descriptor: TypeDescriptor,
        reason: String,
    },
    #[error("No encoding strategy for type '{0}'.")]
    UnsupportedType(TypeDescriptor),
    #[error("Value nesting exceeds the maximum depth of {0}.")]
    DepthExceeded(usize),
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
}
