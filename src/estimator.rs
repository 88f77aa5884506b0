//! Movement estimation from the sample history window.
//!
//! Turns the ordered buffer snapshot into one scalar "movement" per tick.
//! Samples are normalized image-space y coordinates (0 = top), so positive
//! movement means the tracked point rose.
//!
//! The estimator compares a recency-weighted average of the oldest samples
//! against the same weighting applied to the newest samples. The linear
//! weighting keeps each half responsive to its most recent sample while
//! still smoothing single-frame jitter, at the cost of one tick of lag
//! versus an unweighted difference.

/// Derives per-tick movement from a sample window.
///
/// Stateless apart from its sizing parameters; the engine owns the buffer
/// and hands the estimator an ordered snapshot each tick.
#[derive(Debug, Clone, Copy)]
pub struct MovementEstimator {
    /// Minimum samples required before a movement value is defined.
    min_samples: usize,
    /// Size of each comparison sub-window (half the minimum, floor 2).
    half_window: usize,
}

impl MovementEstimator {
    /// Create an estimator for windows of at least `min_samples` samples.
    ///
    /// The sub-window size is derived as `min_samples / 2` with a floor of
    /// 2, so the engine's config validation must guarantee
    /// `min_samples >= 4` for the two sub-windows to fit.
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples,
            half_window: (min_samples / 2).max(2),
        }
    }

    /// Number of samples in each comparison sub-window.
    pub fn half_window(&self) -> usize {
        self.half_window
    }

    /// Minimum window length before movement is defined.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Compute movement for the current window, oldest sample first.
    ///
    /// Returns `None` while the window is below the minimum fill; the
    /// caller treats that tick as "no signal" and performs no transition.
    pub fn movement(&self, window: &[f32]) -> Option<f32> {
        if window.len() < self.min_samples {
            return None;
        }

        let older = &window[..self.half_window];
        let newer = &window[window.len() - self.half_window..];

        Some(Self::weighted_average(older) - Self::weighted_average(newer))
    }

    /// Linearly recency-weighted average: sample `i` (oldest first) gets
    /// weight `i + 1`, so the newest sample in the sub-window dominates.
    fn weighted_average(samples: &[f32]) -> f32 {
        let weighted_sum: f32 = samples
            .iter()
            .enumerate()
            .map(|(i, v)| (i + 1) as f32 * v)
            .sum();
        let weight_total = (samples.len() * (samples.len() + 1)) as f32 / 2.0;

        weighted_sum / weight_total
    }
}
