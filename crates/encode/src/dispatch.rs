use crate::encoders;
use crate::error::EncodeError;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::{TypeDescriptor, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// How a category of values is drawn.
///
/// Strategies hold no state; the same strategy serves every value whose
/// descriptor resolved to it, from any thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Signed integers, and unsigned integers wider than a byte.
    Integer,
    Byte,
    Float,
    Boolean,
    Text,
    Record,
    Sequence,
    Mapping,
    Indirection,
}

impl Strategy {
    /// Selects the strategy for a descriptor. Opaque shapes have none.
    pub fn classify(descriptor: &TypeDescriptor) -> Result<Strategy, EncodeError> {
        match descriptor {
            TypeDescriptor::Int(_) | TypeDescriptor::UInt(_) => Ok(Strategy::Integer),
            TypeDescriptor::Byte => Ok(Strategy::Byte),
            TypeDescriptor::Float(_) => Ok(Strategy::Float),
            TypeDescriptor::Bool => Ok(Strategy::Boolean),
            TypeDescriptor::Text => Ok(Strategy::Text),
            TypeDescriptor::Record(_) => Ok(Strategy::Record),
            TypeDescriptor::Sequence => Ok(Strategy::Sequence),
            TypeDescriptor::Mapping => Ok(Strategy::Mapping),
            TypeDescriptor::Indirection => Ok(Strategy::Indirection),
            TypeDescriptor::Opaque(_) => Err(EncodeError::UnsupportedType(descriptor.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Integer => "integer",
            Strategy::Byte => "byte",
            Strategy::Float => "float",
            Strategy::Boolean => "boolean",
            Strategy::Text => "text",
            Strategy::Record => "record",
            Strategy::Sequence => "sequence",
            Strategy::Mapping => "mapping",
            Strategy::Indirection => "indirection",
        }
    }

    /// Draws `value` into `region`, recursing through `walker` for sub-values.
    pub fn encode(
        self,
        walker: &Walker,
        value: &Value,
        region: &mut Region<'_>,
    ) -> Result<(), EncodeError> {
        let config = walker.config();
        match (self, value) {
            (Strategy::Integer, Value::Int { value, .. }) => {
                encoders::integer::encode_signed(*value, region, config)
            }
            (Strategy::Integer, Value::UInt { value, .. }) => {
                encoders::integer::encode_unsigned(*value, region, config)
            }
            (Strategy::Byte, Value::Byte(byte)) => encoders::byte::encode(*byte, region, config),
            (Strategy::Float, Value::Float { value, .. }) => {
                encoders::float::encode(*value, region, config)
            }
            (Strategy::Boolean, Value::Bool(flag)) => {
                encoders::boolean::encode(*flag, region, config)
            }
            (Strategy::Text, Value::Text(text)) => encoders::text::encode(walker, text, region),
            (Strategy::Record, Value::Record(record)) => {
                encoders::record::encode(walker, record, region)
            }
            (Strategy::Sequence, Value::Sequence(items)) => {
                encoders::sequence::encode(walker, items, region)
            }
            (Strategy::Mapping, Value::Mapping(entries)) => {
                encoders::mapping::encode(walker, entries, region)
            }
            (Strategy::Indirection, Value::Indirection(target)) => {
                encoders::indirection::encode(walker, target.as_deref(), region)
            }
            (_, other) => Err(EncodeError::UnsupportedType(other.descriptor())),
        }
    }
}

static GLOBAL: Lazy<Arc<DispatchCache>> = Lazy::new(|| Arc::new(DispatchCache::new()));

/// Remembers which strategy each descriptor resolved to.
///
/// Entries are never evicted. Two threads resolving the same new descriptor may
/// both classify it; the second insert overwrites the first with an equal value.
#[derive(Debug, Default)]
pub struct DispatchCache {
    strategies: RwLock<HashMap<TypeDescriptor, Strategy>>,
}

impl DispatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by every walker that was not given its own.
    pub fn global() -> Arc<DispatchCache> {
        Arc::clone(&GLOBAL)
    }

    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<Strategy, EncodeError> {
        let cached = self.read().get(descriptor).copied();
        if let Some(strategy) = cached {
            return Ok(strategy);
        }

        let strategy = Strategy::classify(descriptor)?;
        log::debug!("Resolved '{}' to the {} strategy", descriptor, strategy.name());
        self.write().insert(descriptor.clone(), strategy);
        Ok(strategy)
    }

    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.read().contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    // The map is only ever mutated by a single insert or clear, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeDescriptor, Strategy>> {
        self.strategies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeDescriptor, Strategy>> {
        self.strategies.write().unwrap_or_else(PoisonError::into_inner)
    }
}
