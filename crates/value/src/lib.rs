//! # mosaic-value
//!
//! The runtime value model consumed by the encoder.
//!
//! A [`Value`] is an owned, read-only tree that exposes the *shape* of a datum
//! (scalar kind, record, sequence, mapping, indirection) without any schema
//! declared ahead of time. Any `T: Serialize` can be turned into a `Value` with
//! [`to_value`]; values can also be assembled by hand with the `From` impls and
//! [`Record`] builders.
//!
//! Every value has a [`TypeDescriptor`], a cheap hashable identity of its shape
//! that the encoder uses as a dispatch cache key.

mod convert;
mod descriptor;
mod error;
mod ser;
mod value;

pub use descriptor::TypeDescriptor;
pub use error::ValueError;
pub use ser::{ValueSerializer, to_value};
pub use value::{Field, FloatKind, IntKind, Record, UIntKind, Value, Visibility};
