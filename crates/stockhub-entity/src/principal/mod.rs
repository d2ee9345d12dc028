//! Principal (authenticated user) domain entities.

pub mod model;
pub mod role;

pub use model::Principal;
pub use role::PrincipalRole;
