//! # mosaic-encode
//!
//! The structural visual encoder.
//!
//! Given a [`Value`](mosaic_value::Value) and a square drawing [`Region`], the
//! [`Walker`] inspects the value's runtime shape, resolves an encoding
//! [`Strategy`] through the [`DispatchCache`], and lets that strategy draw.
//! Composite strategies carve their region into a grid of child regions and
//! recurse through the walker for every child.
//!
//! Leaf encodings, on a region of side `S`:
//! - signed and wide unsigned integers: an 8×8 bit matrix of the magnitude,
//!   black for non-negative values and red for negative ones
//! - bytes: one horizontal bar per set bit, least significant bit on top
//! - floats: a circle of radius `|v|·S/2`
//! - booleans: a triangle pointing up (true, black) or down (false, red)
//! - text: its UTF-8 bytes, as a sequence of bytes

mod config;
mod dispatch;
mod error;
mod region;
mod walker;

pub mod encoders;
pub mod layout;

pub use config::EncoderConfig;
pub use dispatch::{DispatchCache, Strategy};
pub use error::EncodeError;
pub use region::Region;
pub use walker::Walker;

#[cfg(test)]
mod test_utils;
