//! # LearnKit Gateway
//!
//! Client for the proxy's `/api` endpoints. Every call resolves to an
//! [`ApiResponse`] carrying either `data` or `error`; nothing panics or
//! returns `Err` past this boundary.

mod client;
mod response;

pub use client::{DEFAULT_BASE_URL, Gateway};
pub use response::ApiResponse;
