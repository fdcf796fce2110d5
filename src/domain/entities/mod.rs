//! Core domain entities for redirect resolution.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`LinkRecord`] - A stored slug-to-URL mapping with expiry metadata
//! - [`AccessRecord`] - Per-request context captured for access logging

pub mod access;
pub mod link;

pub use access::AccessRecord;
pub use link::LinkRecord;
