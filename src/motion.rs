//! Motion integration and culling for one tick.

use crate::consts::{BULLET_CULL_Y, BULLET_DY, ENEMY_CULL_MAX_X, ENEMY_CULL_MIN_X, ENEMY_CULL_Y};
use crate::entities::{Bullet, Enemy, GameState};

fn enemy_in_bounds(e: &Enemy) -> bool {
    e.y < ENEMY_CULL_Y && (ENEMY_CULL_MIN_X..=ENEMY_CULL_MAX_X).contains(&e.x)
}

fn bullet_in_bounds(b: &Bullet) -> bool {
    b.y > BULLET_CULL_Y
}

/// Advance enemies by `(dx, dy) * difficulty` and bullets by `BULLET_DY`,
/// then drop whatever left the playfield.  Both collections are rebuilt in
/// one pass each.
pub fn integrate(state: &GameState) -> GameState {
    let k = state.difficulty;

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            x: e.x + e.dx * k,
            y: e.y + e.dy * k,
            ..e.clone()
        })
        .filter(enemy_in_bounds)
        .collect();

    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y + BULLET_DY,
            ..b.clone()
        })
        .filter(bullet_in_bounds)
        .collect();

    GameState {
        enemies,
        bullets,
        ..state.clone()
    }
}
