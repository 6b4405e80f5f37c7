//! Stream schema types
//!
//! JSON Schema building blocks used by the stream descriptors to declare
//! the shape of their records. Schemas here are declared per stream, not
//! inferred from data.

mod types;

pub use types::{JsonSchema, JsonType, JsonTypeOrArray, SchemaProperty};
