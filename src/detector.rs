//! Jump state machine: threshold, hysteresis, and cooldown rules.
//!
//! Consumes one movement value per tick and decides whether a jump event
//! fires. Three mechanisms together bound the event rate:
//! - An activation band `(threshold, ceiling)`: movement must exceed the
//!   threshold to fire, and values at or above the ceiling are filtered as
//!   tracking noise (occlusion, pose reinitialization).
//! - A latch: once a rise fires, the machine stays `Active` and cannot fire
//!   again until movement has dropped below `threshold / settle_divisor`,
//!   a stricter bound than the activation threshold (hysteresis).
//! - A cooldown: a fixed number of ticks after each event during which no
//!   new detection may fire regardless of motion.
//!
//! Per-frame pose estimates flicker near any single threshold; hysteresis
//! plus cooldown require the signal to meaningfully fall before a new rise
//! is recognized.

/// Detection phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetectorPhase {
    /// Not currently registering an upward motion; armed for the next rise.
    Idle,

    /// Inside a registered upward motion, suppressing re-trigger until the
    /// signal settles below the re-arm threshold.
    Active,
}

impl DetectorPhase {
    /// True when the machine is armed and a qualifying rise can fire.
    pub fn is_armed(&self) -> bool {
        matches!(self, DetectorPhase::Idle)
    }
}

/// Threshold and debounce rules for jump detection.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpRuleConfig {
    /// Minimum movement (exclusive) to register a jump.
    pub activation_threshold: f32,

    /// Movement cap (exclusive). Values at or above this are treated as
    /// sensor noise and never fire.
    pub implausible_ceiling: f32,

    /// Divisor applied to the activation threshold to form the re-arm
    /// threshold. Must be > 1 so re-arming is stricter than activation.
    pub settle_divisor: f32,

    /// Ticks after a detection during which new detections are suppressed.
    pub cooldown_period: u32,
}

impl Default for JumpRuleConfig {
    fn default() -> Self {
        Self {
            activation_threshold: 0.03,
            implausible_ceiling: 0.2,
            settle_divisor: 2.0,
            cooldown_period: 10,
        }
    }
}

/// Stateful per-tick jump decision.
///
/// The transition function is evaluated only on ticks where the estimator
/// produced a movement value; "no signal" ticks leave the machine untouched.
#[derive(Debug, Clone)]
pub struct JumpStateMachine {
    config: JumpRuleConfig,
    phase: DetectorPhase,
    cooldown_remaining: u32,
}

impl JumpStateMachine {
    /// Create an idle machine with the given rules.
    pub fn new(config: JumpRuleConfig) -> Self {
        Self {
            config,
            phase: DetectorPhase::Idle,
            cooldown_remaining: 0,
        }
    }

    /// Advance the machine by one tick with movement `m`.
    ///
    /// Returns true exactly on the tick a jump is newly detected. At most
    /// one event fires per tick, and exactly one per qualifying rise.
    pub fn step(&mut self, movement: f32) -> bool {
        let threshold = self.config.activation_threshold;
        let settle_threshold = threshold / self.config.settle_divisor;

        let mut fired = false;

        if self.phase.is_armed()
            && self.cooldown_remaining == 0
            && movement > threshold
            && movement < self.config.implausible_ceiling
        {
            self.phase = DetectorPhase::Active;
            self.cooldown_remaining = self.config.cooldown_period;
            fired = true;
        } else if movement < settle_threshold {
            // Re-arm only once the signal has meaningfully relaxed.
            self.phase = DetectorPhase::Idle;
        }
        // Movement between the settle threshold and the band, or at/above
        // the ceiling, changes nothing.

        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
        }

        fired
    }

    /// Current detection phase.
    pub fn phase(&self) -> DetectorPhase {
        self.phase
    }

    /// Ticks of detection suppression left.
    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    /// Return the machine to its just-constructed state.
    pub fn reset(&mut self) {
        self.phase = DetectorPhase::Idle;
        self.cooldown_remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> JumpStateMachine {
        JumpStateMachine::new(JumpRuleConfig {
            activation_threshold: 0.05,
            implausible_ceiling: 0.15,
            settle_divisor: 3.0,
            cooldown_period: 5,
        })
    }

    #[test]
    fn test_fires_inside_activation_band() {
        let mut machine = machine();
        assert!(machine.step(0.08));
        assert_eq!(machine.phase(), DetectorPhase::Active);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut machine = machine();
        assert!(!machine.step(0.05), "movement equal to threshold must not fire");
        assert!(!machine.step(0.04));
        assert_eq!(machine.phase(), DetectorPhase::Idle);
    }

    #[test]
    fn test_ceiling_is_strict_and_preserves_state() {
        let mut machine = machine();
        assert!(!machine.step(0.15), "movement equal to ceiling must not fire");
        assert!(!machine.step(0.5), "implausible movement must not fire");

        // Filtered movement leaves the machine armed for a genuine rise.
        assert_eq!(machine.phase(), DetectorPhase::Idle);
        assert!(machine.step(0.08));
    }

    #[test]
    fn test_cooldown_suppresses_following_ticks() {
        let mut machine = machine();
        assert!(machine.step(0.08));

        // Event tick arms the cooldown and decrements it once, so the next
        // cooldown_period - 1 ticks are suppressed by the counter alone.
        assert_eq!(machine.cooldown_remaining(), 4);
        for _ in 0..4 {
            assert!(!machine.step(0.08));
        }
        assert_eq!(machine.cooldown_remaining(), 0);
    }

    #[test]
    fn test_latch_survives_cooldown_expiry() {
        let mut machine = machine();
        assert!(machine.step(0.08));

        // Movement stays above threshold well past cooldown expiry; the
        // Active latch must keep suppressing.
        for _ in 0..20 {
            assert!(!machine.step(0.08));
        }
        assert_eq!(machine.phase(), DetectorPhase::Active);
    }

    #[test]
    fn test_rearm_requires_settle_fraction() {
        let mut machine = machine();
        assert!(machine.step(0.08));

        // Drain the cooldown with sub-threshold movement that is still
        // above the settle threshold (0.05 / 3).
        for _ in 0..10 {
            assert!(!machine.step(0.03));
        }
        assert_eq!(machine.phase(), DetectorPhase::Active);

        // A new rise must not fire until the signal has settled.
        assert!(!machine.step(0.08));

        assert!(!machine.step(0.01));
        assert_eq!(machine.phase(), DetectorPhase::Idle);
        assert!(machine.step(0.08));
    }

    #[test]
    fn test_negative_movement_rearms() {
        let mut machine = machine();
        assert!(machine.step(0.08));
        for _ in 0..5 {
            machine.step(0.03);
        }
        assert!(!machine.step(-0.1));
        assert_eq!(machine.phase(), DetectorPhase::Idle);
    }

    #[test]
    fn test_zero_cooldown_still_latches() {
        let mut machine = JumpStateMachine::new(JumpRuleConfig {
            cooldown_period: 0,
            ..JumpRuleConfig::default()
        });

        assert!(machine.step(0.08));
        // No cooldown, but the Active latch alone prevents re-fire.
        assert!(!machine.step(0.08));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut machine = machine();
        machine.step(0.08);
        machine.reset();

        assert_eq!(machine.phase(), DetectorPhase::Idle);
        assert_eq!(machine.cooldown_remaining(), 0);
        assert!(machine.step(0.08));
    }
}
