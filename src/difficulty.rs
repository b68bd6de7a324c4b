//! Difficulty multiplier: `1 + floor(elapsed_s / 15) * 0.1`.

/// Session time per difficulty step.
const STEP_MS: u64 = 15_000;
const STEP_GAIN: f32 = 0.1;

pub fn difficulty_at(elapsed_ms: u64) -> f32 {
    let steps = elapsed_ms / STEP_MS;
    1.0 + steps as f32 * STEP_GAIN
}

/// The value to store after a spawn-check; never lower than `current`.
pub fn recompute(current: f32, elapsed_ms: u64) -> f32 {
    current.max(difficulty_at(elapsed_ms))
}
