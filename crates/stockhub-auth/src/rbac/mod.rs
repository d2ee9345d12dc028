//! Role-based authorization gate.
//!
//! Maps a principal's role to (a) the set of permitted actions and (b) the
//! row-visibility scope for requests and audit entries. The gate is pure —
//! no I/O, no caching — and is consulted on every action attempt with the
//! role freshly resolved from the principals table.

pub mod gate;
pub mod scope;

pub use gate::{Action, allows, permitted_actions};
pub use scope::{VisibilityScope, scope_for_audit, scope_for_requests};
