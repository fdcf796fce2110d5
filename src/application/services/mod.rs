//! Business logic services for the application layer.

pub mod expiry;
pub mod resolver;

pub use expiry::ExpiryOutcome;
pub use resolver::{GoneReason, RedirectResolver, Resolution};
