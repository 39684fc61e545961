//! Relational source access via DuckDB
//!
//! DuckDB attaches the source database read-only through its engine
//! extensions (MySQL, PostgreSQL, SQLite) and serves the three full-table
//! reads the extractor issues.

mod engine;

pub use engine::SourceEngine;
