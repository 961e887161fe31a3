//! HTTP request handlers, one module per resource.

pub mod identity;
pub mod mesa;
