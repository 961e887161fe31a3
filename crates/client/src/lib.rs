//! Terminal front end for the Mesas API.
//!
//! [`api::MesasApi`] wraps the HTTP endpoints, [`app::MesasApp`] implements
//! the list/create/edit/delete flows (every mutation followed by a full
//! reload) and [`view`] renders records for display.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod view;
