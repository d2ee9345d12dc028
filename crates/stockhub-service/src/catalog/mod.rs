//! Inventory catalog service.

pub mod service;

pub use service::CatalogService;
