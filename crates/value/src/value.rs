use crate::descriptor::TypeDescriptor;
use std::sync::Arc;

/// Width of a signed integer scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
}

impl IntKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
        }
    }
}

/// Width of an unsigned integer scalar wider than a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UIntKind {
    U16,
    U32,
    U64,
}

impl UIntKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UIntKind::U16 => "u16",
            UIntKind::U32 => "u32",
            UIntKind::U64 => "u64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatKind::F32 => "f32",
            FloatKind::F64 => "f64",
        }
    }
}

/// Whether a record field belongs to the record's public structure.
///
/// Private fields are carried in the value tree but are not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Leading underscores mark a field as internal.
    pub fn from_field_name(name: &str) -> Self {
        if name.starts_with('_') {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// A named record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Arc<str>,
    pub visibility: Visibility,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let name = name.into();
        Self {
            visibility: Visibility::from_field_name(&name),
            name,
            value: value.into(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A fixed set of named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: Arc<str>,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field; its visibility follows [`Visibility::from_field_name`].
    pub fn with_field(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Adds a field that is never rendered, whatever its name.
    pub fn with_private_field(
        mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<Value>,
    ) -> Self {
        let mut field = Field::new(name, value);
        field.visibility = Visibility::Private;
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn public_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_public())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A datum with its runtime shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int { value: i64, kind: IntKind },
    UInt { value: u64, kind: UIntKind },
    Byte(u8),
    Float { value: f64, kind: FloatKind },
    Text(String),
    Record(Record),
    Sequence(Vec<Value>),
    /// Key/value entries. The order is whatever the source produced and carries no meaning.
    Mapping(Vec<(Value, Value)>),
    /// A pointer, optional or boxed wrapper around at most one value.
    Indirection(Option<Box<Value>>),
    /// A shape with no encoding strategy, named for diagnostics.
    Opaque(Arc<str>),
}

impl Value {
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Bool(_) => TypeDescriptor::Bool,
            Value::Int { kind, .. } => TypeDescriptor::Int(*kind),
            Value::UInt { kind, .. } => TypeDescriptor::UInt(*kind),
            Value::Byte(_) => TypeDescriptor::Byte,
            Value::Float { kind, .. } => TypeDescriptor::Float(*kind),
            Value::Text(_) => TypeDescriptor::Text,
            Value::Record(record) => TypeDescriptor::Record(record.name.clone()),
            Value::Sequence(_) => TypeDescriptor::Sequence,
            Value::Mapping(_) => TypeDescriptor::Mapping,
            Value::Indirection(_) => TypeDescriptor::Indirection,
            Value::Opaque(name) => TypeDescriptor::Opaque(name.clone()),
        }
    }

    pub fn opaque(name: impl Into<Arc<str>>) -> Self {
        Value::Opaque(name.into())
    }

    /// An unset indirection.
    pub fn none() -> Self {
        Value::Indirection(None)
    }

    pub fn some(value: impl Into<Value>) -> Self {
        Value::Indirection(Some(Box::new(value.into())))
    }

    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_)
                | Value::Int { .. }
                | Value::UInt { .. }
                | Value::Byte(_)
                | Value::Float { .. }
                | Value::Text(_)
        )
    }
}
