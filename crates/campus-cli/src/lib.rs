//! # Campus CLI
//!
//! Operator tools for the Campus API:
//!
//! - [`seeder`]: populate the database with a small fake dataset, and
//!   clear it back out
//! - [`superuser`]: create superuser accounts (superusers cannot be
//!   created through the API)

pub mod seeder;
pub mod superuser;
