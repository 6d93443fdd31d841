//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the data-access interface and its backing stores.

pub mod store;
