//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, a random source) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected random source.

use crate::clock::Clock;
use crate::collision;
use crate::consts::{
    PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_MIN_X, PLAYER_MIN_Y, PLAYER_START_X, PLAYER_START_Y,
    PLAYER_STEP,
};
use crate::difficulty;
use crate::entities::{Bullet, EntityView, GameState, GameStatus, Player, Snapshot};
use crate::input::Intent;
use crate::motion;
use crate::spawner::{self, RandomSource};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player at the start position, nothing
/// spawned, difficulty 1.0, clock at zero.
pub fn init_state() -> GameState {
    GameState {
        player: Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        difficulty: 1.0,
        status: GameStatus::Playing,
        clock: Clock::start(),
        last_spawn_ms: 0,
        next_id: 1,
    }
}

/// Restart after (or during) a session.  Difficulty and the session clock
/// are re-initialised along with everything else.
pub fn restart(state: &GameState) -> GameState {
    log::info!(
        "restart: previous session ended at {} ms with score {}",
        state.clock.elapsed_ms(),
        state.score
    );
    init_state()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Displace the player one step, clamped to the playfield.
pub fn move_player(state: &GameState, dir: Direction) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let Player { x, y } = state.player;
    let (x, y) = match dir {
        Direction::Up => (x, y - PLAYER_STEP),
        Direction::Down => (x, y + PLAYER_STEP),
        Direction::Left => (x - PLAYER_STEP, y),
        Direction::Right => (x + PLAYER_STEP, y),
    };
    GameState {
        player: Player {
            x: x.clamp(PLAYER_MIN_X, PLAYER_MAX_X),
            y: y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y),
        },
        ..state.clone()
    }
}

/// Fire one bullet from the player's current position.  No cooldown: every
/// fire key press (including key repeat) is one bullet.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        id: state.next_id,
        x: state.player.x,
        y: state.player.y,
    });
    GameState {
        bullets,
        next_id: state.next_id + 1,
        ..state.clone()
    }
}

pub fn apply_intent(state: &GameState, intent: Intent) -> GameState {
    match intent {
        Intent::MoveUp => move_player(state, Direction::Up),
        Intent::MoveDown => move_player(state, Direction::Down),
        Intent::MoveLeft => move_player(state, Direction::Left),
        Intent::MoveRight => move_player(state, Direction::Right),
        Intent::Fire => player_shoot(state),
        Intent::None => state.clone(),
    }
}

// ── Per-tick update (nearly pure — randomness is injected) ──────────────────

/// Advance the simulation by one 50 ms tick.
///
/// Order: clock, spawn-check (every 20th tick: difficulty, then spawn),
/// motion and culling, bullet hits, player contact.  After game over the
/// state is returned unchanged.
pub fn tick(state: &GameState, rng: &mut impl RandomSource) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    let clock = state.clock.advance();
    let mut next = GameState {
        clock,
        ..state.clone()
    };

    // ── 1. Spawn-check ───────────────────────────────────────────────────────
    if clock.is_spawn_check() {
        let difficulty = difficulty::recompute(next.difficulty, clock.elapsed_ms());
        if difficulty > next.difficulty {
            log::info!("difficulty {:.1} at {} ms", difficulty, clock.elapsed_ms());
        }
        next = spawner::spawn_check(
            &GameState {
                difficulty,
                ..next
            },
            rng,
        );
    }

    // ── 2. Motion & culling ──────────────────────────────────────────────────
    let next = motion::integrate(&next);

    // ── 3. Collisions ────────────────────────────────────────────────────────
    let next = collision::resolve(&next);

    log::trace!(
        "tick {}: {} enemies, {} bullets, score {}",
        clock.tick(),
        next.enemies.len(),
        next.bullets.len(),
        next.score
    );
    next
}

// ── Render view ──────────────────────────────────────────────────────────────

pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        player: state.player,
        enemies: state
            .enemies
            .iter()
            .map(|e| EntityView {
                id: e.id,
                x: e.x,
                y: e.y,
            })
            .collect(),
        bullets: state
            .bullets
            .iter()
            .map(|b| EntityView {
                id: b.id,
                x: b.x,
                y: b.y,
            })
            .collect(),
        score: state.score,
        difficulty: state.difficulty,
        game_over: state.is_over(),
    }
}
