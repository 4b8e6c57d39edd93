//! The contract shared by every API object that carries a snowflake.

use core::fmt;

use crate::snowflake::{Snowflake, creation_time};
use crate::timestamp::Timestamp;
use crate::value::FieldValue;

/// Base interface for chat-platform API objects.
///
/// Concrete kinds declare a stable kind tag, their identity, and the set of
/// fields the projector may read. The identity half of the contract is
/// read-only: the id is assigned once at construction and never changes, so
/// implementations are safe to share across threads without coordination.
pub trait Entity {
    /// Stable tag naming the concrete kind (e.g. `"user"`, `"channel"`).
    fn kind(&self) -> &'static str;

    /// The assigned snowflake, if the object has one.
    ///
    /// Objects that have not been persisted by the platform yet have no id.
    fn id(&self) -> Option<&Snowflake>;

    /// Creation instant derived from the id.
    ///
    /// Recomputed on every read, [`Timestamp::UNKNOWN`] when the id is
    /// absent or malformed.
    fn created_at(&self) -> Timestamp {
        creation_time(self.id())
    }

    /// Names of the declared projectable fields, in declaration order.
    fn field_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Look up a declared field by name.
    ///
    /// `None` both for unknown names and for fields that currently have no
    /// value; the projector treats the two identically.
    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    /// Short display form, `[<kind> <id>]`.
    fn tag(&self) -> EntityTag<'_>
    where
        Self: Sized,
    {
        EntityTag(self)
    }
}

/// Display adapter rendering an entity as `[<kind> <id>]`.
///
/// `<none>` marks an entity without an id.
pub struct EntityTag<'a>(pub &'a dyn Entity);

impl fmt::Display for EntityTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.id() {
            Some(id) => write!(f, "[{} {}]", self.0.kind(), id),
            None => write!(f, "[{} <none>]", self.0.kind()),
        }
    }
}
