//! Error types for the jump sensing engine.
//!
//! There are only two failure surfaces, both immediate rejections:
//! - A bad configuration refuses to construct an engine.
//! - A non-finite sample fails the tick call before touching any state.
//!
//! Everything else (insufficient fill, implausible movement) is a defined
//! "no event" outcome, not an error.

use thiserror::Error;

/// Configuration rejected at engine construction.
///
/// The engine refuses to initialize rather than behave incorrectly at
/// runtime, so every variant names the parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `buffer_capacity` is below the minimum usable window.
    #[error("buffer_capacity must be at least 4, got {0}")]
    CapacityTooSmall(usize),

    /// `min_samples_for_estimate` cannot cover two weighted sub-windows.
    #[error("min_samples_for_estimate must be at least 4, got {0}")]
    MinSamplesTooSmall(usize),

    /// `min_samples_for_estimate` can never be reached by the buffer.
    #[error("min_samples_for_estimate ({min_samples}) exceeds buffer_capacity ({capacity})")]
    MinSamplesExceedsCapacity { min_samples: usize, capacity: usize },

    /// `activation_threshold` must be strictly positive.
    #[error("activation_threshold must be positive, got {0}")]
    ThresholdNotPositive(f32),

    /// `implausible_ceiling` must sit strictly above the threshold.
    #[error("implausible_ceiling ({ceiling}) must exceed activation_threshold ({threshold})")]
    CeilingNotAboveThreshold { ceiling: f32, threshold: f32 },

    /// `settle_divisor` must be greater than 1 so the re-arm threshold is
    /// stricter than the activation threshold.
    #[error("settle_divisor must be greater than 1, got {0}")]
    SettleDivisorTooSmall(f32),
}

/// A sample rejected before entering the history buffer.
///
/// A NaN or infinity would poison the weighted average until the buffer
/// fully cycles, so the call fails and engine state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// The caller supplied a NaN or infinite sample.
    #[error("sample must be finite, got {0}")]
    NonFinite(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_names_parameter() {
        let err = ConfigError::CapacityTooSmall(2);
        assert!(err.to_string().contains("buffer_capacity"));

        let err = ConfigError::MinSamplesExceedsCapacity {
            min_samples: 12,
            capacity: 8,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("8"));
    }

    #[test]
    fn test_sample_error_display() {
        let err = SampleError::NonFinite(f32::NAN);
        assert!(err.to_string().contains("finite"));
    }
}
