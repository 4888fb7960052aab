use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// An error from encoding or delivering a remote write request.
///
/// Every failure is classified so callers can tell "never reached the
/// server" (`Transport`, `Timeout`) apart from "server rejected the
/// request" (`Rejected`) and decide about retrying themselves; nothing
/// in this crate retries on its own.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The input was malformed; raised before any network activity.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Serialization or compression failed.
    ///
    /// Unreachable for input that passed validation; treat as a bug.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The request never completed at the network level
    /// (DNS, connection, TLS).
    #[error("error during remote write: {0}")]
    Transport(surf::Error),

    /// The configured timeout elapsed before a response was received.
    #[error("remote write timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("remote write rejected with status {status}")]
    Rejected { status: u16, body: Option<String> },
}

/// Whether to log (verbose) error output.
/// Off unless the host application opts in via `debug_error_enabled`.
static ERROR_LOGGER: AtomicBool = AtomicBool::new(false);

pub fn debug_error_enabled(enabled: bool) {
    ERROR_LOGGER.store(enabled, Ordering::Relaxed);
}

pub fn debug_error(err: &WriteError) {
    if ERROR_LOGGER.load(Ordering::Relaxed) {
        eprintln!("Warn: {}", err);
    }
}
