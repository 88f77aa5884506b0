//! Jump Sensing Engine Library
//!
//! A motion-detection kernel that converts a noisy stream of vertical-position
//! samples (e.g. hip height from a pose-estimation pipeline) into a clean,
//! debounced boolean jump-event stream.
//!
//! # Design Philosophy
//!
//! - **One scalar in, one boolean out**: the engine knows nothing about
//!   cameras, landmarks, or rendering. Collaborators supply one finite sample
//!   per tick and receive one event flag per tick.
//! - **Tick-indexed, not clock-indexed**: correctness is independent of
//!   call-timing jitter; real-time latency is a tuning concern between the
//!   window size and the caller's sample rate.
//! - **Fail-loud inputs**: bad configuration refuses to construct, non-finite
//!   samples fail the call. Insufficient data and implausible motion are
//!   defined non-events, never errors.
//! - **Bounded chatter**: hysteresis plus cooldown guarantee at most one
//!   event per cooldown period and exactly one per qualifying rise.
//!
//! # Example
//!
//! ```
//! use jump_sensing::{JumpEngine, JumpEngineConfig};
//!
//! let mut engine = JumpEngine::new(JumpEngineConfig::default()).unwrap();
//!
//! // Standing still: buffer fills, no events.
//! for _ in 0..5 {
//!     assert!(!engine.update(0.50).unwrap());
//! }
//!
//! // Hips rise (y shrinks): one event fires on the qualifying tick.
//! let events = engine.process_batch(&[0.45, 0.40, 0.35, 0.35]).unwrap();
//! assert_eq!(events.iter().filter(|&&e| e).count(), 1);
//! ```

pub mod buffer;
pub mod detector;
pub mod engine;
pub mod error;
pub mod estimator;


// Re-export commonly used types
pub use buffer::SampleBuffer;
pub use detector::{DetectorPhase, JumpRuleConfig, JumpStateMachine};
pub use engine::{JumpEngine, JumpEngineConfig};
pub use error::{ConfigError, SampleError};
pub use estimator::MovementEstimator;
