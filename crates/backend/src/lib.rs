//! Outbound HTTP for the gallery frontend.
//!
//! - [`client::HalClient`] -- follows hypermedia relations on the gallery
//!   REST API and exchanges JSON resources with it.
//! - [`reset::ResetFanout`] -- best-effort reset calls to the file services.

pub mod client;
pub mod error;
pub mod hal;
pub mod reset;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::{build_http_client, forwarded_headers, parse_http_url, HalClient};
pub use error::BackendError;
pub use reset::{ResetFanout, ResetOutcome, ResetReport, ResetTarget};
