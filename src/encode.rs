//! Encoding of sample series into the remote write wire format.
//!
//! The output of [`encode`] is the exact HTTP request body the protocol
//! expects: a protobuf-serialized `WriteRequest` compressed with snappy's
//! block format (not the framed/streaming variant).

use prost::Message;

use crate::debug::DEBUG;
use crate::error::WriteError;
use crate::proto;
use crate::series::SampleSeries;

/// Encode a batch of series into a compressed request body.
///
/// Series, labels, and samples all keep their input order; reordering and
/// deduplication are the backend's responsibility. Batching is the
/// caller's: one call encodes exactly the series passed to it.
pub fn encode(series: &[SampleSeries]) -> Result<Vec<u8>, WriteError> {
    match encode_inner(series) {
        Ok(compressed) => {
            DEBUG.encode_succeeded();
            Ok(compressed)
        }
        Err(err) => {
            DEBUG.encode_failed();
            Err(err)
        }
    }
}

fn encode_inner(series: &[SampleSeries]) -> Result<Vec<u8>, WriteError> {
    if series.is_empty() {
        return Err(WriteError::Validation("no series to encode".into()));
    }

    // Build the WriteRequest; per-series invariants are guaranteed by
    // SampleSeries construction.
    let mut timeseries = Vec::with_capacity(series.len());
    for series in series {
        let labels = series
            .labels()
            .pairs()
            .iter()
            .map(|(name, value)| proto::Label {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        let samples = series
            .values()
            .iter()
            .zip(series.timestamps())
            .map(|(&value, &timestamp)| proto::Sample { value, timestamp })
            .collect();
        timeseries.push(proto::TimeSeries { labels, samples });
    }
    let request = proto::WriteRequest { timeseries };

    // Serialize request
    let mut bytes: Vec<u8> = Vec::with_capacity(request.encoded_len());
    request
        .encode(&mut bytes)
        .map_err(|err| WriteError::Encoding(format!("serializing write request: {}", err)))?;

    // Compress request body
    let mut encoder = snap::raw::Encoder::new();
    let compressed = encoder
        .compress_vec(&bytes)
        .map_err(|err| WriteError::Encoding(format!("compressing write request: {}", err)))?;

    Ok(compressed)
}
