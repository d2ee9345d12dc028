//! # stockhub-api
//!
//! HTTP API layer for StockHub, built on Axum. Routes are defined in
//! [`router`], shared dependencies live in [`state::AppState`], and the
//! [`extractors::AuthUser`] extractor turns a Bearer token into a
//! [`stockhub_service::context::RequestContext`] with the principal's
//! role freshly loaded from the database.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
