//! Complete jump detection engine integrating all processing stages.
//!
//! This module orchestrates the full per-tick data flow: a new sample is
//! pushed into the history buffer, the estimator derives a movement value
//! from the window, and the state machine decides whether a jump event
//! fires. One call per tick, one boolean out.
//!
//! The engine is single-threaded and tick-indexed, not wall-clock-indexed:
//! call-timing jitter cannot affect the decision sequence, but the real-time
//! latency of detection scales with the caller's actual sample rate. Buffer
//! size, threshold, and cooldown must be tuned together with that rate.

use crate::buffer::SampleBuffer;
use crate::detector::{DetectorPhase, JumpRuleConfig, JumpStateMachine};
use crate::error::{ConfigError, SampleError};
use crate::estimator::MovementEstimator;

/// Configuration for the complete jump detection engine.
///
/// Immutable after construction. Validation is fatal: an engine with an
/// inconsistent configuration is never created.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpEngineConfig {
    /// Maximum samples held in the history buffer. Minimum 4.
    pub buffer_capacity: usize,

    /// Samples required before a movement value is defined. Must be at
    /// least 4 (two comparison sub-windows of at least 2) and at most
    /// `buffer_capacity`.
    pub min_samples_for_estimate: usize,

    /// Threshold and debounce rules for the state machine.
    pub rules: JumpRuleConfig,
}

impl Default for JumpEngineConfig {
    fn default() -> Self {
        // Tuned for ~30Hz pose streams: a 5-sample window spans roughly
        // 170ms, enough to ride out single-frame landmark jitter.
        Self {
            buffer_capacity: 5,
            min_samples_for_estimate: 5,
            rules: JumpRuleConfig::default(),
        }
    }
}

impl JumpEngineConfig {
    /// Check all construction-time invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_capacity < 4 {
            return Err(ConfigError::CapacityTooSmall(self.buffer_capacity));
        }
        if self.min_samples_for_estimate < 4 {
            return Err(ConfigError::MinSamplesTooSmall(self.min_samples_for_estimate));
        }
        if self.min_samples_for_estimate > self.buffer_capacity {
            return Err(ConfigError::MinSamplesExceedsCapacity {
                min_samples: self.min_samples_for_estimate,
                capacity: self.buffer_capacity,
            });
        }
        if self.rules.activation_threshold <= 0.0 {
            return Err(ConfigError::ThresholdNotPositive(
                self.rules.activation_threshold,
            ));
        }
        if self.rules.implausible_ceiling <= self.rules.activation_threshold {
            return Err(ConfigError::CeilingNotAboveThreshold {
                ceiling: self.rules.implausible_ceiling,
                threshold: self.rules.activation_threshold,
            });
        }
        if self.rules.settle_divisor <= 1.0 {
            return Err(ConfigError::SettleDivisorTooSmall(self.rules.settle_divisor));
        }
        Ok(())
    }
}

/// Stateful jump detection engine.
///
/// Feed one sample per tick with [`JumpEngine::update`]; the return value is
/// true exactly on the tick a jump is newly detected. Diagnostics (last
/// movement value, phase, cooldown) are read-only side channels and never
/// part of the event contract.
pub struct JumpEngine {
    config: JumpEngineConfig,

    // Processing stages
    buffer: SampleBuffer,
    estimator: MovementEstimator,
    state_machine: JumpStateMachine,

    // Diagnostics
    last_movement: Option<f32>,
    tick_count: u64,
    total_jumps: u64,
}

impl JumpEngine {
    /// Create an engine, rejecting inconsistent configurations.
    pub fn new(config: JumpEngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            buffer: SampleBuffer::new(config.buffer_capacity),
            estimator: MovementEstimator::new(config.min_samples_for_estimate),
            state_machine: JumpStateMachine::new(config.rules),
            config,
            last_movement: None,
            tick_count: 0,
            total_jumps: 0,
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults() -> Self {
        // Default config is validated by tests; construction cannot fail.
        match Self::new(JumpEngineConfig::default()) {
            Ok(engine) => engine,
            Err(_) => unreachable!("default configuration is valid"),
        }
    }

    /// Process one tick: record a sample, return whether a jump fired.
    ///
    /// Rejects non-finite samples without touching any state; a NaN in the
    /// buffer would corrupt every movement value until the window cycles.
    /// Ticks below the minimum fill return false with no state change.
    pub fn update(&mut self, sample: f32) -> Result<bool, SampleError> {
        if !sample.is_finite() {
            return Err(SampleError::NonFinite(sample));
        }

        self.tick_count += 1;
        self.buffer.push(sample);

        let movement = self.estimator.movement(self.buffer.snapshot());
        self.last_movement = movement;

        // No signal yet: the state machine does not advance on this tick.
        let Some(movement) = movement else {
            return Ok(false);
        };

        let fired = self.state_machine.step(movement);
        if fired {
            self.total_jumps += 1;
        }

        Ok(fired)
    }

    /// Process a batch of samples and return the per-tick event stream.
    ///
    /// Fails on the first non-finite sample; ticks before it are applied.
    pub fn process_batch(&mut self, samples: &[f32]) -> Result<Vec<bool>, SampleError> {
        let mut events = Vec::with_capacity(samples.len());
        for &sample in samples {
            events.push(self.update(sample)?);
        }
        Ok(events)
    }

    /// Movement value computed on the most recent tick, if the buffer had
    /// reached minimum fill.
    pub fn last_movement(&self) -> Option<f32> {
        self.last_movement
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> DetectorPhase {
        self.state_machine.phase()
    }

    /// Ticks of detection suppression left.
    pub fn cooldown_remaining(&self) -> u32 {
        self.state_machine.cooldown_remaining()
    }

    /// Total ticks processed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total jump events emitted over the engine's lifetime.
    pub fn total_jumps(&self) -> u64 {
        self.total_jumps
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &JumpEngineConfig {
        &self.config
    }

    /// Return the engine to its just-constructed state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state_machine.reset();
        self.last_movement = None;
        self.tick_count = 0;
        self.total_jumps = 0;
    }
}
