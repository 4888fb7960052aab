//! # Prometheus Remote Write
//!
//! A client-side encoder and transmitter for the Prometheus remote write
//! protocol: [`encode`] turns in-memory sample series into the
//! snappy-compressed protobuf wire format, and [`RemoteWrite`] delivers
//! the payload over HTTP with the protocol's framing headers.
//!
//! The crate performs exactly one delivery attempt per call and classifies
//! the outcome; retry policy, batching, and rate limiting belong to the
//! caller.

pub mod client;
pub mod debug;
pub mod encode;
pub mod error;
pub mod proto;
pub mod series;

pub use client::{RemoteWrite, WriteResponse};
pub use encode::encode;
pub use error::WriteError;
pub use series::{LabelSet, SampleSeries, METRIC_NAME_LABEL};
