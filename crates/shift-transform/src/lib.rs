//! Client side of the external transformation service.
//!
//! The service itself is opaque: it takes the current table plus a
//! natural-language instruction and returns a replacement table. Only
//! the wire contract is implemented here; nothing is retried.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{DEFAULT_TIMEOUT, TransformClient};
pub use error::TransformError;
pub use protocol::{TransformRequest, TransformResponse};
