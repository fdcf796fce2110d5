//! Utility functions for path parsing, payload decoding, and URL assembly.
//!
//! Pure helpers used by the resolution engine:
//!
//! - [`path`] - Request path parsing into slug and payload segment
//! - [`base64_json`] - Base64-JSON payload decoding and parameter merging
//! - [`url_query`] - Query-string assembly for redirect targets

pub mod base64_json;
pub mod path;
pub mod url_query;
