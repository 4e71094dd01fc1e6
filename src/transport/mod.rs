//! HTTP transport for the TTS.Monster API.

mod http;

pub use http::{HttpTransport, TransportError};
