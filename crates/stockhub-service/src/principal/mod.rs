//! Principal/account service.

pub mod service;

pub use service::{LoginOutcome, PrincipalService};
