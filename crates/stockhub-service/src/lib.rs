//! # stockhub-service
//!
//! Business logic services for StockHub. Every operation takes an explicit
//! [`context::RequestContext`] naming the acting principal and their
//! freshly resolved role; the authorization gate is consulted inside each
//! privileged method, never cached across requests.

pub mod audit;
pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod notification;
pub mod principal;
pub mod request;
