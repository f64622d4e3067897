//! Talking to the public test REST API.
//!
//! [`ApiClient`] is a thin async wrapper over `reqwest`. [`Backend`] owns the
//! tokio runtime the requests run on and hands the UI thread a
//! [`Request`] handle per call; finished requests wake the runner so the next
//! frame can pick the result up.

pub mod backend;
pub mod client;
pub mod error;
pub mod model;

pub use backend::{Backend, Request};
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use error::NetError;
pub use model::{NewPost, Post, User, UserUpdate};

#[cfg(test)]
mod tests;
