//! A `serde::Serializer` that captures the shape of any `Serialize` type.
//!
//! Mapping of serde's data model onto [`Value`]:
//!
//! | serde                         | Value                                   |
//! |-------------------------------|-----------------------------------------|
//! | `bool`                        | `Bool`                                  |
//! | `i8`..`i64`                   | `Int`                                   |
//! | `u8`                          | `Byte`                                  |
//! | `u16`..`u64`                  | `UInt`                                  |
//! | `f32`, `f64`                  | `Float`                                 |
//! | `char`, `str`                 | `Text`                                  |
//! | bytes                         | `Sequence` of `Byte`                    |
//! | `None` / `Some`, `()`          | `Indirection`                           |
//! | seq, tuple                    | `Sequence`                              |
//! | map                           | `Mapping`                               |
//! | struct, tuple/newtype struct  | `Record` named after the type           |
//! | struct/tuple/newtype variant  | `Record` named `Enum::Variant`          |
//! | unit struct, unit variant     | `Opaque`                                |
//! | `i128`, `u128`                | `Opaque`                                |

use crate::error::ValueError;
use crate::value::{Field, FloatKind, IntKind, Record, UIntKind, Value, Visibility};
use serde::ser::{self, Serialize};

/// Converts `value` into its runtime [`Value`] shape.
pub fn to_value<T>(value: &T) -> Result<Value, ValueError>
where
    T: Serialize + ?Sized,
{
    value.serialize(ValueSerializer)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SerializeSequence;
    type SerializeTuple = SerializeSequence;
    type SerializeTupleStruct = SerializeRecord;
    type SerializeTupleVariant = SerializeRecord;
    type SerializeMap = SerializeMapping;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeRecord;

    fn serialize_bool(self, v: bool) -> Result<Value, ValueError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ValueError> {
        Ok(Value::Int { value: v.into(), kind: IntKind::I8 })
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ValueError> {
        Ok(Value::Int { value: v.into(), kind: IntKind::I16 })
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ValueError> {
        Ok(Value::Int { value: v.into(), kind: IntKind::I32 })
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ValueError> {
        Ok(Value::Int { value: v, kind: IntKind::I64 })
    }

    fn serialize_i128(self, _v: i128) -> Result<Value, ValueError> {
        Ok(Value::opaque("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ValueError> {
        Ok(Value::Byte(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ValueError> {
        Ok(Value::UInt { value: v.into(), kind: UIntKind::U16 })
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ValueError> {
        Ok(Value::UInt { value: v.into(), kind: UIntKind::U32 })
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ValueError> {
        Ok(Value::UInt { value: v, kind: UIntKind::U64 })
    }

    fn serialize_u128(self, _v: u128) -> Result<Value, ValueError> {
        Ok(Value::opaque("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ValueError> {
        Ok(Value::Float { value: v.into(), kind: FloatKind::F32 })
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ValueError> {
        Ok(Value::Float { value: v, kind: FloatKind::F64 })
    }

    fn serialize_char(self, v: char) -> Result<Value, ValueError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, ValueError> {
        Ok(Value::Text(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ValueError> {
        Ok(Value::Sequence(v.iter().copied().map(Value::Byte).collect()))
    }

    fn serialize_none(self) -> Result<Value, ValueError> {
        Ok(Value::Indirection(None))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, ValueError>
    where
        T: Serialize + ?Sized,
    {
        Ok(Value::Indirection(Some(Box::new(to_value(value)?))))
    }

    // `()` and JSON `null` point at nothing.
    fn serialize_unit(self) -> Result<Value, ValueError> {
        Ok(Value::Indirection(None))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, ValueError> {
        Ok(Value::opaque(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ValueError> {
        Ok(Value::opaque(variant_name(name, variant)))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value, ValueError>
    where
        T: Serialize + ?Sized,
    {
        let mut record = Record::new(name);
        record.push(positional_field(0, to_value(value)?));
        Ok(Value::Record(record))
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, ValueError>
    where
        T: Serialize + ?Sized,
    {
        let mut record = Record::new(variant_name(name, variant));
        record.push(positional_field(0, to_value(value)?));
        Ok(Value::Record(record))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeSequence, ValueError> {
        Ok(SerializeSequence {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSequence, ValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<SerializeRecord, ValueError> {
        Ok(SerializeRecord::new(name, len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeRecord, ValueError> {
        Ok(SerializeRecord::new(variant_name(name, variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMapping, ValueError> {
        Ok(SerializeMapping {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<SerializeRecord, ValueError> {
        Ok(SerializeRecord::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeRecord, ValueError> {
        Ok(SerializeRecord::new(variant_name(name, variant), len))
    }
}

fn variant_name(name: &str, variant: &str) -> String {
    format!("{}::{}", name, variant)
}

fn positional_field(index: usize, value: Value) -> Field {
    Field {
        name: index.to_string().into(),
        visibility: Visibility::Public,
        value,
    }
}

pub struct SerializeSequence {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeSequence {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SerializeSequence {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeRecord {
    record: Record,
}

impl SerializeRecord {
    fn new(name: impl Into<std::sync::Arc<str>>, len: usize) -> Self {
        let mut record = Record::new(name);
        record.fields.reserve(len);
        Self { record }
    }

    fn push_positional<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        let index = self.record.fields.len();
        self.record.push(positional_field(index, to_value(value)?));
        Ok(())
    }

    fn push_named<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.record.push(Field::new(key, to_value(value)?));
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.push_positional(value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeTupleVariant for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.push_positional(value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.push_named(key, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStructVariant for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.push_named(key, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(self.record))
    }
}

pub struct SerializeMapping {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for SerializeMapping {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        if self.pending_key.is_some() {
            return Err(ValueError::MissingValue);
        }
        self.pending_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        let key = self.pending_key.take().ok_or(ValueError::MissingKey)?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        if self.pending_key.is_some() {
            return Err(ValueError::MissingValue);
        }
        Ok(Value::Mapping(self.entries))
    }
}
