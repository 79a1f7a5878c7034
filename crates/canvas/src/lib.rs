//! Vector drawing surface for mosaic.
//!
//! This crate provides the drawing capability the encoder renders onto:
//! - `Surface` trait for abstracting group creation and primitive drawing
//! - `SvgDocument`, an append-only scene that serializes through the `svg` crate
//! - `Shape` and `Paint` describing the primitives (rectangle, circle, polygon)
//!
//! The surface never decides *what* to draw; callers hand it fully computed
//! coordinates in the local space of the group they draw into.

mod document;
mod error;
mod shape;
mod surface;

pub use document::{PlacedShape, SvgDocument};
pub use error::CanvasError;
pub use shape::{Paint, Shape, ShapeKind};
pub use surface::{GroupId, Surface};

pub use mosaic_types::{Color, Point, Rect, Transform};
