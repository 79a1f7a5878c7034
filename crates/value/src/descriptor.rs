use crate::value::{FloatKind, IntKind, UIntKind};
use std::fmt;
use std::sync::Arc;

/// Stable identity of a value's shape.
///
/// Descriptors compare equal exactly when two values must be encoded by the
/// same strategy, which makes them usable as dispatch cache keys. Records are
/// identified by type name; sequences, mappings and indirections by category
/// alone, since their strategy does not depend on what they contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Bool,
    Int(IntKind),
    UInt(UIntKind),
    Byte,
    Float(FloatKind),
    Text,
    Record(Arc<str>),
    Sequence,
    Mapping,
    Indirection,
    Opaque(Arc<str>),
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Bool => f.write_str("bool"),
            TypeDescriptor::Int(kind) => f.write_str(kind.as_str()),
            TypeDescriptor::UInt(kind) => f.write_str(kind.as_str()),
            TypeDescriptor::Byte => f.write_str("u8"),
            TypeDescriptor::Float(kind) => f.write_str(kind.as_str()),
            TypeDescriptor::Text => f.write_str("string"),
            TypeDescriptor::Record(name) => write!(f, "struct {}", name),
            TypeDescriptor::Sequence => f.write_str("sequence"),
            TypeDescriptor::Mapping => f.write_str("mapping"),
            TypeDescriptor::Indirection => f.write_str("indirection"),
            TypeDescriptor::Opaque(name) => f.write_str(name),
        }
    }
}
