//! Jump Sensing Engine
//!
//! A motion-detection kernel that converts noisy vertical-position streams
//! into debounced jump events.
//!
//! This is the entry point for standalone binaries. For library use, see lib.rs.

use jump_sensing::{JumpEngine, JumpEngineConfig};

fn main() {
    println!("Jump Sensing Engine v0.1.0");
    println!("Debounced jump detection kernel");

    let mut engine = JumpEngine::new(JumpEngineConfig::default())
        .unwrap_or_else(|e| panic!("invalid configuration: {e}"));

    // Example: standing, a jump, landing, back to standing.
    let hip_heights = [
        0.50, 0.50, 0.50, 0.50, 0.50, // standing
        0.45, 0.40, 0.36, 0.34, // rising
        0.34, 0.36, 0.42, 0.48, 0.50, // falling back
        0.50, 0.50, 0.50, 0.50, // standing again
    ];

    for (tick, &hip_y) in hip_heights.iter().enumerate() {
        match engine.update(hip_y) {
            Ok(true) => println!("tick {tick:2}: hip_y={hip_y:.2}  JUMP!"),
            Ok(false) => println!(
                "tick {tick:2}: hip_y={hip_y:.2}  movement={}",
                engine
                    .last_movement()
                    .map_or("n/a".to_string(), |m| format!("{m:+.4}")),
            ),
            Err(e) => println!("tick {tick:2}: rejected sample: {e}"),
        }
    }

    println!(
        "Processed {} ticks, detected {} jump(s)",
        engine.tick_count(),
        engine.total_jumps()
    );
}
