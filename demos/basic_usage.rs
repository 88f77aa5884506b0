/// Basic usage example: feed hip-height samples, get jump events
use jump_sensing::{JumpEngine, JumpEngineConfig, JumpRuleConfig};

fn main() {
    println!("=== Jump Sensing Engine: Basic Example ===\n");

    // A wider window and longer cooldown than the defaults, tuned for a
    // 30Hz pose stream with visible landmark jitter.
    let config = JumpEngineConfig {
        buffer_capacity: 10,
        min_samples_for_estimate: 8,
        rules: JumpRuleConfig {
            activation_threshold: 0.05,
            implausible_ceiling: 0.15,
            settle_divisor: 3.0,
            cooldown_period: 15,
        },
    };
    let mut engine = JumpEngine::new(config).expect("config is consistent");

    // Simulated normalized hip-y stream: standing with jitter, a jump,
    // landing, then standing again. Smaller values mean higher.
    let mut stream: Vec<f32> = vec![
        // Standing phase with per-frame jitter
        0.501, 0.498, 0.503, 0.500, 0.497, 0.502, 0.499, 0.500,
        // Takeoff: hips rise quickly
        0.46, 0.42, 0.38, 0.34, 0.32,
        // Airborne peak and descent
        0.31, 0.33, 0.38, 0.44, 0.49,
    ];
    // Settle back to standing
    stream.extend(std::iter::repeat(0.50).take(12));

    for (tick, &hip_y) in stream.iter().enumerate() {
        let jumped = engine.update(hip_y).expect("samples are finite");
        if jumped {
            println!("tick {tick:2}: JUMP detected (hip_y = {hip_y:.3})");
        }
    }

    println!("\nTicks processed:  {}", engine.tick_count());
    println!("Jumps detected:   {}", engine.total_jumps());
    println!("Final phase:      {:?}", engine.phase());
    println!(
        "Last movement:    {:?}",
        engine.last_movement().map(|m| format!("{m:+.4}"))
    );
}
