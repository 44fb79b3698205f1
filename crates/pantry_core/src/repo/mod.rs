//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - A missing row is a normal outcome (`None`/`false`), never an error.
//! - Only storage transport failures surface as `DbError`.

pub mod product_repo;
