//! Configuration modules for the Campus API.
//!
//! - [`cors`]: CORS allow-list loaded from `ALLOWED_ORIGINS`
//! - [`database`]: PostgreSQL connection pool from `DATABASE_URL`

pub mod cors;
pub mod database;
