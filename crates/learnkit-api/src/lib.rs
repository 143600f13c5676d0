//! # LearnKit API
//!
//! HTTP surface of the proxy:
//!
//! ```text
//! POST /api/ask        {question}            -> {answer, timestamp}
//! POST /api/summarize  {text}                -> {summary, originalLength, timestamp}
//! POST /api/quiz       {text}                -> {questions, totalQuestions, timestamp}
//! POST /api/roadmap    {topic, level?}       -> {topic, level, ..., steps, timestamp}
//! GET  /health                               -> {status, message}
//! *                                          -> 404 {error: "Endpoint not found"}
//! ```
//!
//! Failures are reported as `{error}` with 400, 404 or 500.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use http::routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
