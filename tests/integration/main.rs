//! In-process integration tests for the StockHub HTTP API.
//!
//! These drive the full router through `tower::ServiceExt::oneshot`. The
//! database pool is lazy and never connects, so only routes whose behavior
//! is decided before any query — health, authentication gating — are
//! asserted here; everything data-dependent is covered by the crate-level
//! unit tests.

mod helpers;

mod auth_test;
mod health_test;
