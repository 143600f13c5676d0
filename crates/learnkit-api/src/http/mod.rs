//! HTTP module.

pub mod handlers;
pub mod routes;
