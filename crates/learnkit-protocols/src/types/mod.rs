//! Task and result types shared by the proxy and the gateway.

mod quiz;
mod roadmap;
mod task;

pub use quiz::*;
pub use roadmap::*;
pub use task::*;
