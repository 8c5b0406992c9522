//! Backend API gateway client.
//!
//! ## Layers
//!
//! ```text
//!  views::*  ──>  ApiClient (client.rs)        typed methods, shape decoding
//!                    │
//!                    │ Transport::request / probe
//!                    v
//!                 HttpTransport (transport.rs)  one pooled reqwest::Client,
//!                    │                          base URL + /api, timeouts
//!                    v
//!                 backend HTTP API
//! ```
//!
//! Every call yields a [`ResponseEnvelope`]. Network failures, timeouts,
//! non-2xx statuses and unparseable bodies all become `success = false`
//! envelopes with `timestamp = 0`; nothing in this module returns `Err` to a
//! page.

pub mod client;
pub mod envelope;
#[cfg(test)]
pub mod testing;
pub mod transport;

pub use client::{ApiClient, parse_json_payload, parse_updates};
pub use envelope::ResponseEnvelope;
pub use transport::{HttpTransport, Method, Transport, join_url};
