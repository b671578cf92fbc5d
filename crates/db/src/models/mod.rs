//! Row models and request DTOs.
//!
//! Struct fields carry the snake_case column names; serde renames them to
//! the camelCase names used on the wire.

pub mod director;
pub mod movie;
