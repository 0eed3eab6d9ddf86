//! # Tasktrack Shared Library
//!
//! Storage and data access for the Tasktrack API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and table management
//! - `models`: Persisted records and their CRUD operations
//! - `schema`: Transport shapes returned over HTTP

pub mod db;
pub mod models;
pub mod schema;

/// Current version of the Tasktrack shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
