//! # mosaic
//!
//! Renders the runtime shape of any value as a nested SVG mosaic.
//!
//! Scalars become small glyphs (bit matrices, bars, circles, triangles) and
//! composites split their square among their children, so the picture of a
//! value is a recursive tiling that mirrors its structure.
//!
//! ```no_run
//! #[derive(serde::Serialize)]
//! struct Sample {
//!     x: i32,
//!     y: f64,
//!     z: bool,
//! }
//!
//! let svg = mosaic::marshal(&Sample { x: -1234, y: 0.73, z: true }, 300.0)?;
//! std::fs::write("sample.svg", svg)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For repeated rendering with custom settings or an isolated dispatch cache,
//! build a [`Marshaller`].

mod error;
mod marshal;

pub use error::MarshalError;
pub use marshal::Marshaller;

pub use mosaic_canvas::{CanvasError, SvgDocument};
pub use mosaic_encode::{DispatchCache, EncodeError, EncoderConfig, Strategy, Walker};
pub use mosaic_value::{Record, TypeDescriptor, Value, ValueError, to_value};

use serde::Serialize;

/// Renders `value` into a `size` × `size` SVG document.
///
/// Uses the default configuration and the process-wide dispatch cache. A size
/// that is not positive and finite is rejected before `value` is inspected.
pub fn marshal<T>(value: &T, size: f64) -> Result<Vec<u8>, MarshalError>
where
    T: Serialize + ?Sized,
{
    Marshaller::new().marshal(value, size)
}

/// Like [`marshal`], for a value tree that is already built.
pub fn marshal_value(value: &Value, size: f64) -> Result<Vec<u8>, MarshalError> {
    Marshaller::new().marshal_value(value, size)
}
