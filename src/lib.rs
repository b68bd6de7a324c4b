//! Arcade shooter simulation core.
//!
//! - `entities`: pure data (player, enemies, bullets, session state, snapshot)
//! - `compute`: the entity store's pure transforms (input, tick, restart)
//! - `clock`: fixed-tick clock and wall-clock pacer
//! - `input`: key name to intent mapping
//! - `spawner`, `motion`, `collision`, `difficulty`: per-tick phases
//!
//! Rendering lives in the binary and only ever reads a [`entities::Snapshot`].

pub mod clock;
pub mod collision;
pub mod compute;
pub mod difficulty;
pub mod entities;
pub mod input;
pub mod motion;
pub mod spawner;

/// Playfield, timing and scoring constants.
///
/// Coordinates are percentages of the viewport: `x` across, `y` down.
pub mod consts {
    /// Motion/collision tick period in milliseconds.
    pub const TICK_MS: u64 = 50;
    /// Every Nth motion tick is also a spawn-check tick (1000 ms).
    pub const SPAWN_CHECK_EVERY: u64 = 20;

    /// Player bounds (inclusive).
    pub const PLAYER_MIN_X: f32 = 0.0;
    pub const PLAYER_MAX_X: f32 = 100.0;
    pub const PLAYER_MIN_Y: f32 = 0.0;
    pub const PLAYER_MAX_Y: f32 = 95.0;
    /// Where the player starts and restarts.
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 75.0;
    /// Displacement per movement key press.
    pub const PLAYER_STEP: f32 = 5.0;

    /// Bullet displacement per tick (upward). Not scaled by difficulty.
    pub const BULLET_DY: f32 = -2.0;

    /// Enemies at or below this `y` are culled.
    pub const ENEMY_CULL_Y: f32 = 110.0;
    /// Enemies with `x` outside `[ENEMY_CULL_MIN_X, ENEMY_CULL_MAX_X]` are culled.
    pub const ENEMY_CULL_MIN_X: f32 = -20.0;
    pub const ENEMY_CULL_MAX_X: f32 = 120.0;
    /// Bullets at or above this `y` are culled.
    pub const BULLET_CULL_Y: f32 = -10.0;

    /// Half-size of the axis-aligned contact box (strict `<`).
    pub const CONTACT_RANGE: f32 = 5.0;
    /// Score per destroyed enemy.
    pub const KILL_AWARD: u32 = 10;
}
