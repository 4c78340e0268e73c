//! # Campus Models
//!
//! Validated value types shared between the Campus API server and the
//! operator CLI.
//!
//! The types in [`value_types`] reject malformed input when they are
//! constructed or deserialized, so a [`value_types::PhoneNumber`] or
//! [`value_types::CourseCode`] held anywhere in the application is known
//! to be well-formed.

pub mod value_types;

pub use value_types::{CourseCode, PhoneNumber, ValueTypeError};
