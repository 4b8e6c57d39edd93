//! Plain-data projection of entities.
//!
//! Two views share one normalization routine: [`inspect`] for debug output
//! and [`to_plain_data`] for wire-shaped output driven by an explicit field
//! list. Projection is best-effort by contract: absent fields are skipped,
//! unknown instants surface as JSON null, and nothing here panics.

use serde_json::{Map, Value};

use crate::entity::Entity;
use crate::value::FieldValue;

/// Key under which the raw id is emitted.
const ID_KEY: &str = "id";
/// Key under which the derived creation instant is emitted.
const CREATED_AT_KEY: &str = "createdAt";

/// Names with a leading underscore are internal and hidden from [`inspect`].
const INTERNAL_MARKER: char = '_';

/// Apply the serialization rule for a single field value.
///
/// Sequence elements are normalized recursively; composites and scalars
/// pass through shallowly.
pub fn normalize(value: FieldValue) -> Value {
    match value {
        // JSON numbers are only exact to 2^53 - 1; 64-bit integers go out
        // as their decimal string.
        FieldValue::BigInt(n) => Value::String(n.to_string()),
        FieldValue::Projected(v) => v.to_plain(),
        FieldValue::Sequence(seq) => {
            Value::Array(seq.values().into_iter().map(normalize).collect())
        }
        FieldValue::Composite(v) => v,
        FieldValue::Scalar(s) => s.into(),
    }
}

/// Debug view: every declared field that currently has a value.
///
/// The raw `id` is included when present; the derived creation instant is
/// not, since it is computed rather than stored. Internal fields (leading
/// underscore) are hidden. Deterministic for an unmutated entity.
pub fn inspect(entity: &dyn Entity) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(id) = entity.id() {
        out.insert(ID_KEY.to_owned(), Value::String(id.as_str().to_owned()));
    }
    for name in entity.field_names() {
        if name.starts_with(INTERNAL_MARKER) {
            continue;
        }
        if let Some(value) = entity.field(name) {
            out.insert((*name).to_owned(), normalize(value));
        }
    }
    out
}

/// Wire view: `id` and `createdAt` (when an id is assigned) followed by the
/// requested fields, in the order given.
///
/// Unknown and absent field names are silently skipped, so callers can pass
/// one field list for several variants of a kind.
pub fn to_plain_data(entity: &dyn Entity, fields: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(id) = entity.id() {
        out.insert(ID_KEY.to_owned(), Value::String(id.as_str().to_owned()));
        out.insert(CREATED_AT_KEY.to_owned(), entity.created_at().to_json());
    }
    for name in fields {
        if let Some(value) = entity.field(name) {
            out.insert((*name).to_owned(), normalize(value));
        }
    }
    out
}
