//! Bullet/enemy and player/enemy contact.
//!
//! Contact is an axis-aligned box test in playfield coordinates:
//! `|ax - bx| < CONTACT_RANGE && |ay - by| < CONTACT_RANGE`.

use std::collections::HashSet;

use crate::consts::{CONTACT_RANGE, KILL_AWARD};
use crate::entities::{GameState, GameStatus};

pub fn in_contact(ax: f32, ay: f32, bx: f32, by: f32) -> bool {
    (ax - bx).abs() < CONTACT_RANGE && (ay - by).abs() < CONTACT_RANGE
}

/// Resolve every bullet against the enemies.
///
/// Bullets are taken in collection order; each one destroys the first enemy
/// (in collection order) it touches that is still alive.  A destroyed enemy
/// cannot be hit again in the same tick, so every pair scores exactly once.
pub fn resolve_bullet_hits(state: &GameState) -> GameState {
    let mut dead_enemies: HashSet<u64> = HashSet::new();
    let mut spent_bullets: HashSet<u64> = HashSet::new();

    for bullet in &state.bullets {
        let hit = state.enemies.iter().find(|e| {
            !dead_enemies.contains(&e.id) && in_contact(bullet.x, bullet.y, e.x, e.y)
        });
        if let Some(enemy) = hit {
            log::debug!("bullet {} destroyed enemy {}", bullet.id, enemy.id);
            dead_enemies.insert(enemy.id);
            spent_bullets.insert(bullet.id);
        }
    }

    if dead_enemies.is_empty() {
        return state.clone();
    }

    let enemies = state
        .enemies
        .iter()
        .filter(|e| !dead_enemies.contains(&e.id))
        .cloned()
        .collect();
    let bullets = state
        .bullets
        .iter()
        .filter(|b| !spent_bullets.contains(&b.id))
        .cloned()
        .collect();

    GameState {
        enemies,
        bullets,
        score: state.score + KILL_AWARD * dead_enemies.len() as u32,
        ..state.clone()
    }
}

/// True if any enemy touches the player.
pub fn player_hit(state: &GameState) -> bool {
    let p = &state.player;
    state.enemies.iter().any(|e| in_contact(p.x, p.y, e.x, e.y))
}

/// Full collision phase: bullets first, then the player against the
/// enemies that survived.
pub fn resolve(state: &GameState) -> GameState {
    let state = resolve_bullet_hits(state);
    if player_hit(&state) {
        log::info!(
            "player hit at ({:.1}, {:.1}), game over with score {}",
            state.player.x,
            state.player.y,
            state.score
        );
        return GameState {
            status: GameStatus::GameOver,
            ..state
        };
    }
    state
}
