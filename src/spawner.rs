//! Formation spawning.
//!
//! On a spawn-check the spawner compares the time since the last spawn with
//! `BASE_INTERVAL_MS / difficulty`; when due, it flips a coin between the two
//! formations and appends five enemies with consecutive fresh ids.  All
//! randomness goes through [`RandomSource`] so tests can pin exact positions.

use rand::Rng;

use crate::entities::{Enemy, GameState};

/// Spawn interval at difficulty 1.0.
pub const BASE_INTERVAL_MS: f32 = 3000.0;
/// Enemies per formation.
pub const FORMATION_SIZE: usize = 5;

// ── V formation ──────────────────────────────────────────────────────────────

/// Center x is drawn from the middle 80% of the width.
const V_CENTER_MIN_X: f32 = 10.0;
const V_CENTER_SPAN: f32 = 80.0;
const V_SPACING_X: f32 = 8.0;
/// Row of the formation's tip, above the top edge.
const V_TOP_Y: f32 = -5.0;
/// Extra height per unit of horizontal offset from the center.
const V_STAGGER_Y: f32 = 5.0;
const V_DESCENT: f32 = 0.3;

// ── Diagonal formation ───────────────────────────────────────────────────────

const DIAG_LEFT_X: f32 = -5.0;
const DIAG_RIGHT_X: f32 = 105.0;
/// Each member sits this much further off-screen than the previous one.
const DIAG_SPACING_X: f32 = 3.0;
const DIAG_TOP_Y: f32 = 5.0;
const DIAG_SPACING_Y: f32 = 6.0;
const DIAG_DRIFT: f32 = 0.4;
const DIAG_DESCENT: f32 = 0.25;

/// Source of the spawner's random choices.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f32;
    /// Fair coin.
    fn coin(&mut self) -> bool;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formation {
    V,
    Diagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// Interval between spawns at the given difficulty.
pub fn spawn_interval_ms(difficulty: f32) -> f32 {
    BASE_INTERVAL_MS / difficulty
}

pub fn is_due(state: &GameState) -> bool {
    let since = state.clock.elapsed_ms().saturating_sub(state.last_spawn_ms);
    since as f32 >= spawn_interval_ms(state.difficulty)
}

/// Five enemies in a V about `center_x`, tip lowest, descending straight down.
pub fn v_formation(first_id: u64, center_x: f32, difficulty: f32) -> Vec<Enemy> {
    (-2i32..=2)
        .enumerate()
        .map(|(i, offset)| Enemy {
            id: first_id + i as u64,
            x: center_x + offset as f32 * V_SPACING_X,
            y: V_TOP_Y - offset.abs() as f32 * V_STAGGER_Y,
            dx: 0.0,
            dy: V_DESCENT * difficulty,
        })
        .collect()
}

/// Five enemies entering from `edge`, drifting toward the opposite side.
pub fn diagonal_formation(first_id: u64, edge: Edge, difficulty: f32) -> Vec<Enemy> {
    (0..FORMATION_SIZE)
        .map(|i| {
            let step = i as f32;
            let (x, dx) = match edge {
                Edge::Left => (DIAG_LEFT_X - step * DIAG_SPACING_X, DIAG_DRIFT),
                Edge::Right => (DIAG_RIGHT_X + step * DIAG_SPACING_X, -DIAG_DRIFT),
            };
            Enemy {
                id: first_id + i as u64,
                x,
                y: DIAG_TOP_Y + step * DIAG_SPACING_Y,
                dx: dx * difficulty,
                dy: DIAG_DESCENT * difficulty,
            }
        })
        .collect()
}

/// Pick a formation and generate it.
pub fn spawn_formation(
    first_id: u64,
    difficulty: f32,
    rng: &mut impl RandomSource,
) -> (Formation, Vec<Enemy>) {
    if rng.coin() {
        let center_x = V_CENTER_MIN_X + rng.unit() * V_CENTER_SPAN;
        (Formation::V, v_formation(first_id, center_x, difficulty))
    } else {
        let edge = if rng.coin() { Edge::Left } else { Edge::Right };
        (
            Formation::Diagonal,
            diagonal_formation(first_id, edge, difficulty),
        )
    }
}

/// Spawn-check phase: returns the new state (unchanged when not due).
pub fn spawn_check(state: &GameState, rng: &mut impl RandomSource) -> GameState {
    if !is_due(state) {
        return state.clone();
    }
    let (formation, batch) = spawn_formation(state.next_id, state.difficulty, rng);
    log::debug!(
        "spawned {:?} formation, ids {}..{} at {} ms",
        formation,
        state.next_id,
        state.next_id + batch.len() as u64,
        state.clock.elapsed_ms()
    );

    let mut enemies = state.enemies.clone();
    enemies.extend(batch);
    GameState {
        enemies,
        last_spawn_ms: state.clock.elapsed_ms(),
        next_id: state.next_id + FORMATION_SIZE as u64,
        ..state.clone()
    }
}
