//! Fixed-capacity sample history buffer.
//!
//! Holds the most recent vertical-position samples, oldest first. Pushing
//! at capacity evicts the oldest entry (FIFO ring semantics), so the buffer
//! always spans the most recent window of ticks.
//!
//! Finiteness of samples is enforced by the engine before anything reaches
//! this buffer; at this level every scalar is accepted.

/// Ordered history of the most recent scalar samples.
///
/// The buffer never exceeds its configured capacity. Eviction is implicit:
/// once full, each push drops the oldest sample. With window sizes of 5-10
/// samples the shift on eviction is a handful of floats, so per-tick cost
/// stays effectively O(1) with no allocation after construction.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer that holds at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if the buffer is full.
    pub fn push(&mut self, sample: f32) {
        if self.samples.len() == self.capacity {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configured maximum number of samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current contents, oldest first, without mutating the buffer.
    pub fn snapshot(&self) -> &[f32] {
        &self.samples
    }

    /// Discard all recorded samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
