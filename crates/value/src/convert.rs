use crate::value::{FloatKind, IntKind, Record, UIntKind, Value};

macro_rules! from_int {
    ($($ty:ty => $variant:ident, $kind:expr;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant { value: v.into(), kind: $kind }
                }
            }
        )*
    };
}

from_int! {
    i8 => Int, IntKind::I8;
    i16 => Int, IntKind::I16;
    i32 => Int, IntKind::I32;
    i64 => Int, IntKind::I64;
    u16 => UInt, UIntKind::U16;
    u32 => UInt, UIntKind::U32;
    u64 => UInt, UIntKind::U64;
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Byte(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float {
            value: v.into(),
            kind: FloatKind::F32,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float {
            value: v,
            kind: FloatKind::F64,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::sequence(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Indirection(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::sequence(iter)
    }
}
