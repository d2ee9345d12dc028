//! # stockhub-database
//!
//! PostgreSQL access for StockHub: pool construction, migration running,
//! and one repository per collection. Repositories own the SQL — including
//! the row-visibility predicates, so scoped roles cannot reach unscoped
//! rows through any caller.

pub mod connection;
pub mod migration;
pub mod repositories;
