//! Domain types and validation shared by the Mesas service and client.

pub mod error;
pub mod mesa;
pub mod types;
