//! Field values and the serialization capabilities they opt into.
//!
//! Nothing here sniffs shapes at run time: a field advertises how it
//! serializes through the [`FieldValue`] variant it is wrapped in, and
//! custom field types opt into the richer behaviors by implementing a
//! capability trait.

use core::fmt;

use serde_json::Value;

use crate::snowflake::Snowflake;
use crate::timestamp::Timestamp;

/// Capability: a field type that produces its own plain-data form.
///
/// Typical implementors are nested entities and bitfield wrappers.
pub trait ToPlain: fmt::Debug {
    fn to_plain(&self) -> Value;
}

/// Capability: a collection-like field exposing its values in order.
pub trait EnumerateValues: fmt::Debug {
    fn values(&self) -> Vec<FieldValue>;
}

/// Any vector of convertible elements is enumerable as-is.
impl<T> EnumerateValues for Vec<T>
where
    T: Clone + Into<FieldValue> + fmt::Debug,
{
    fn values(&self) -> Vec<FieldValue> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// A primitive scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(n) => Value::from(n),
            Scalar::Float(n) => serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number),
            Scalar::Str(s) => Value::String(s),
        }
    }
}

/// A single projectable field value, tagged by the serialization rule that
/// applies to it.
///
/// The projector handles each variant without inspecting the payload, so a
/// value that fits no richer rule simply passes through.
#[derive(Debug)]
pub enum FieldValue {
    /// Integer kind wider than JSON-safe interop; always serialized as its
    /// exact decimal string.
    BigInt(u64),
    /// A value that serializes itself.
    Projected(Box<dyn ToPlain>),
    /// A collection expanded to an ordered array of its values.
    Sequence(Box<dyn EnumerateValues>),
    /// Composite passed through shallowly.
    Composite(Value),
    /// Primitive scalar passed through as-is.
    Scalar(Scalar),
}

impl FieldValue {
    /// Wrap a self-serializing value.
    pub fn projected(value: impl ToPlain + 'static) -> Self {
        Self::Projected(Box::new(value))
    }

    /// Wrap an ordered collection.
    pub fn sequence(values: impl EnumerateValues + 'static) -> Self {
        Self::Sequence(Box::new(values))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::Str(value.to_owned()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Str(value))
    }
}

/// 64-bit unsigned integers are the snowflake-sized kind and always render
/// as decimal strings.
impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::BigInt(value)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Composite(value)
    }
}

/// Snowflake-valued fields (parent ids, owner ids, ...) render as their raw
/// string token.
impl From<&Snowflake> for FieldValue {
    fn from(value: &Snowflake) -> Self {
        Self::Scalar(Scalar::Str(value.as_str().to_owned()))
    }
}

impl From<Snowflake> for FieldValue {
    fn from(value: Snowflake) -> Self {
        Self::Scalar(Scalar::Str(value.as_str().to_owned()))
    }
}

impl From<Timestamp> for FieldValue {
    fn from(value: Timestamp) -> Self {
        Self::Scalar(Scalar::Float(value.millis()))
    }
}
