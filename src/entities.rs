//! All game entity types — pure data, no logic.

use serde::Serialize;

use crate::clock::Clock;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    /// Terminal until an explicit restart; every tick-driven process is frozen.
    GameOver,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Velocity per tick, before the integrator's difficulty scaling.
    pub dx: f32,
    pub dy: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet. Speed is the fixed `consts::BULLET_DY`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    /// Non-decreasing within a session, `>= 1.0`.
    pub difficulty: f32,
    pub status: GameStatus,
    /// Session clock; `clock.elapsed_ms()` is the time since session start.
    pub clock: Clock,
    /// Session time of the last formation spawn.
    pub last_spawn_ms: u64,
    /// Next entity id to hand out (shared by enemies and bullets).
    pub next_id: u64,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

// ── Render snapshot ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityView {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

/// What the presentation layer reads once per frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub player: Player,
    pub enemies: Vec<EntityView>,
    pub bullets: Vec<EntityView>,
    pub score: u32,
    pub difficulty: f32,
    pub game_over: bool,
}
