//! `aviary-core` — base abstraction shared by every chat-platform API object.
//!
//! Three services: creation-time decoding of snowflake identifiers,
//! plain-data projection (debug inspection + wire serialization), and short
//! display forms. Concrete entity kinds, transport, and caching live in
//! other crates.

pub mod entity;
pub mod error;
pub mod projection;
pub mod snowflake;
pub mod timestamp;
pub mod value;

pub use entity::{Entity, EntityTag};
pub use error::{EntityError, EntityResult};
pub use projection::{inspect, normalize, to_plain_data};
pub use snowflake::{PLATFORM_EPOCH_MILLIS, Snowflake, creation_time};
pub use timestamp::Timestamp;
pub use value::{EnumerateValues, FieldValue, Scalar, ToPlain};
