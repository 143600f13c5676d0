//! Completion provider protocol definitions.
//!
//! A provider wraps a hosted language model and turns a prompt into
//! completion text.

mod model;
mod request;
mod response;
mod traits;

pub use model::*;
pub use request::*;
pub use response::*;
pub use traits::*;
