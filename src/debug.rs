pub use std::sync::atomic::{AtomicUsize, Ordering};

pub static DEBUG: DebugMetrics = DebugMetrics::new();

pub struct DebugMetrics {
    encode_count: AtomicUsize,
    encode_errors: AtomicUsize,
    write_count: AtomicUsize,
    write_errors: AtomicUsize,
}

impl DebugMetrics {
    pub const fn new() -> Self {
        DebugMetrics {
            encode_count: AtomicUsize::new(0),
            encode_errors: AtomicUsize::new(0),
            write_count: AtomicUsize::new(0),
            write_errors: AtomicUsize::new(0),
        }
    }

    pub fn encode_succeeded(&self) {
        self.encode_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn encode_failed(&self) {
        self.encode_count.fetch_add(1, Ordering::Relaxed);
        self.encode_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn write_succeeded(&self) {
        self.write_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn write_failed(&self) {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    // Log the current metrics and reset the counters
    pub fn publish(&self) {
        let encode_count = self.encode_count.swap(0, Ordering::Relaxed);
        let encode_errors = self.encode_errors.swap(0, Ordering::Relaxed);
        let write_count = self.write_count.swap(0, Ordering::Relaxed);
        let write_errors = self.write_errors.swap(0, Ordering::Relaxed);
        println!(
            "Debug: encodes {} (errors {}) | writes {} (errors {})",
            encode_count, encode_errors, write_count, write_errors
        );
    }
}
