//! HTTP surface of the redirect engine.

pub mod handlers;
pub mod middleware;
