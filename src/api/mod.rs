//! API layer: HTTP pipeline, wire models and the accounts resource.

pub mod accounts;
pub mod client;
pub mod models;
