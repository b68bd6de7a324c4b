mod common;

use arcade_shooter::clock::Clock;
use arcade_shooter::compute::*;
use arcade_shooter::entities::*;
use arcade_shooter::input::Intent;

use common::{approx, NoRandom, ScriptedRng};

fn make_state() -> GameState {
    init_state()
}

fn enemy(id: u64, x: f32, y: f32, dx: f32, dy: f32) -> Enemy {
    Enemy { id, x, y, dx, dy }
}

fn bullet(id: u64, x: f32, y: f32) -> Bullet {
    Bullet { id, x, y }
}

// ── init_state / restart ──────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = init_state();
    assert_eq!(s.player, Player { x: 50.0, y: 75.0 });
}

#[test]
fn init_state_empty_collections() {
    let s = init_state();
    assert!(s.enemies.is_empty());
    assert!(s.bullets.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.difficulty, 1.0);
    assert_eq!(s.clock.tick(), 0);
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn restart_clears_everything() {
    let mut s = make_state();
    s.player = Player { x: 10.0, y: 5.0 };
    s.enemies.push(enemy(1, 20.0, 20.0, 0.0, 0.0));
    s.bullets.push(bullet(2, 30.0, 30.0));
    s.score = 120;
    s.difficulty = 1.4;
    s.status = GameStatus::GameOver;
    s.clock = Clock::at_tick(1234);
    s.last_spawn_ms = 60_000;

    let r = restart(&s);
    assert_eq!(r, init_state());
}

#[test]
fn restart_is_idempotent() {
    let mut s = make_state();
    s.score = 40;
    let once = restart(&s);
    let twice = restart(&restart(&s));
    assert_eq!(once, twice);
    assert_eq!(once.score, 0);
    assert!(!once.is_over());
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn move_each_direction_by_one_step() {
    let s = make_state(); // (50, 75)
    assert_eq!(move_player(&s, Direction::Up).player, Player { x: 50.0, y: 70.0 });
    assert_eq!(move_player(&s, Direction::Down).player, Player { x: 50.0, y: 80.0 });
    assert_eq!(move_player(&s, Direction::Left).player, Player { x: 45.0, y: 75.0 });
    assert_eq!(move_player(&s, Direction::Right).player, Player { x: 55.0, y: 75.0 });
}

#[test]
fn move_clamps_at_right_and_bottom() {
    let mut s = make_state();
    s.player = Player { x: 98.0, y: 93.0 };
    let s2 = move_player(&move_player(&s, Direction::Right), Direction::Down);
    assert_eq!(s2.player, Player { x: 100.0, y: 95.0 });
}

#[test]
fn move_clamps_at_left_and_top() {
    let mut s = make_state();
    s.player = Player { x: 2.0, y: 3.0 };
    let s2 = move_player(&move_player(&s, Direction::Left), Direction::Up);
    assert_eq!(s2.player, Player { x: 0.0, y: 0.0 });
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _ = move_player(&s, Direction::Left);
    assert_eq!(s.player.x, 50.0);
}

#[test]
fn movement_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    for intent in [Intent::MoveUp, Intent::MoveDown, Intent::MoveLeft, Intent::MoveRight] {
        assert_eq!(apply_intent(&s, intent), s);
    }
}

#[test]
fn none_intent_is_a_no_op() {
    let s = make_state();
    assert_eq!(apply_intent(&s, Intent::None), s);
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn shoot_adds_bullet_at_player_position() {
    let s = make_state();
    let s2 = player_shoot(&s);
    assert_eq!(s2.bullets, vec![bullet(s.next_id, 50.0, 75.0)]);
    assert_eq!(s2.next_id, s.next_id + 1);
}

#[test]
fn every_fire_press_is_one_bullet() {
    let mut s = make_state();
    for _ in 0..10 {
        s = apply_intent(&s, Intent::Fire);
    }
    assert_eq!(s.bullets.len(), 10);
    let mut ids: Vec<u64> = s.bullets.iter().map(|b| b.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn shoot_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    assert!(player_shoot(&s).bullets.is_empty());
}

#[test]
fn shoot_does_not_mutate_original() {
    let s = make_state();
    let _ = player_shoot(&s);
    assert!(s.bullets.is_empty());
}

// ── tick — motion ─────────────────────────────────────────────────────────────

#[test]
fn tick_advances_clock() {
    let s = make_state();
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.clock.tick(), 1);
    assert_eq!(s2.clock.elapsed_ms(), 50);
}

#[test]
fn tick_enemy_moves_by_velocity_times_difficulty() {
    let mut s = make_state();
    s.difficulty = 1.5;
    s.enemies.push(enemy(1, 30.0, 20.0, 1.0, 2.0));
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.enemies[0].x, 31.5);
    assert_eq!(s2.enemies[0].y, 23.0);
}

#[test]
fn tick_bullet_speed_ignores_difficulty() {
    let mut s = make_state();
    s.difficulty = 2.0;
    s.bullets.push(bullet(1, 20.0, 50.0));
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.bullets[0].y, 48.0);
}

#[test]
fn tick_culls_enemies_leaving_the_playfield() {
    let mut s = make_state();
    s.enemies = vec![
        enemy(1, 10.0, 109.0, 0.0, 1.0),  // reaches y=110
        enemy(2, 119.5, 10.0, 1.0, 0.0),  // past x=120
        enemy(3, -19.5, 10.0, -1.0, 0.0), // past x=-20
        enemy(4, 10.0, 109.5, 0.0, 0.0),  // still inside
        enemy(5, 120.0, 10.0, 0.0, 0.0),  // on the edge, inside
    ];
    let s2 = tick(&s, &mut NoRandom);
    let ids: Vec<u64> = s2.enemies.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 5]);
}

#[test]
fn tick_culls_bullets_at_top() {
    let mut s = make_state();
    s.bullets = vec![bullet(1, 10.0, -7.5), bullet(2, 20.0, -8.0)];
    let s2 = tick(&s, &mut NoRandom);
    let ids: Vec<u64> = s2.bullets.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1]); // -9.5 kept, -10 culled
}

#[test]
fn tick_does_not_mutate_original() {
    let mut s = make_state();
    s.enemies.push(enemy(1, 30.0, 20.0, 0.0, 1.0));
    let before = s.clone();
    let _ = tick(&s, &mut NoRandom);
    assert_eq!(s, before);
}

// ── tick — collisions ─────────────────────────────────────────────────────────

#[test]
fn tick_bullet_hits_enemy_before_player_contact() {
    // Bullet, enemy and player all on (50, 50): the bullet takes the enemy
    // out first, so the player survives.
    let mut s = make_state();
    s.player = Player { x: 50.0, y: 50.0 };
    s.enemies.push(enemy(1, 50.0, 50.0, 0.0, 0.0));
    s.bullets.push(bullet(2, 50.0, 50.0));
    let s2 = tick(&s, &mut NoRandom);
    assert!(s2.enemies.is_empty());
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.score, 10);
    assert!(!s2.is_over());
}

#[test]
fn tick_bullet_misses_outside_box() {
    let mut s = make_state();
    s.enemies.push(enemy(1, 50.0, 20.0, 0.0, 0.0));
    s.bullets.push(bullet(2, 55.0, 22.0)); // dx exactly 5: not < 5
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.score, 0);
}

#[test]
fn two_bullets_on_one_enemy_score_once() {
    let mut s = make_state();
    s.enemies.push(enemy(3, 50.0, 20.0, 0.0, 0.0));
    s.bullets = vec![bullet(1, 50.0, 22.0), bullet(2, 51.0, 22.0)];
    let s2 = tick(&s, &mut NoRandom);
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.score, 10);
    // The first bullet in order is spent; the second flies on.
    let ids: Vec<u64> = s2.bullets.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn one_bullet_takes_only_the_first_enemy() {
    let mut s = make_state();
    s.enemies = vec![enemy(1, 50.0, 20.0, 0.0, 0.0), enemy(2, 51.0, 20.0, 0.0, 0.0)];
    s.bullets.push(bullet(3, 50.0, 22.0));
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.score, 10);
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.enemies[0].id, 2);
}

#[test]
fn tick_player_contact_ends_the_game() {
    let mut s = make_state(); // player (50, 75)
    s.enemies.push(enemy(1, 52.0, 74.0, 0.0, 0.0));
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.status, GameStatus::GameOver);
}

#[test]
fn game_over_freezes_every_tick() {
    let mut s = make_state();
    s.enemies.push(enemy(1, 52.0, 74.0, 0.0, 0.0));
    s.enemies.push(enemy(2, 10.0, 10.0, 1.0, 1.0));
    s.bullets.push(bullet(3, 30.0, 60.0));
    let over = tick(&s, &mut NoRandom);
    assert!(over.is_over());

    let mut later = over.clone();
    for _ in 0..100 {
        later = tick(&later, &mut NoRandom);
    }
    assert_eq!(later, over);
}

#[test]
fn restart_after_game_over_resumes_ticking() {
    let mut s = make_state();
    s.enemies.push(enemy(1, 50.0, 75.0, 0.0, 0.0));
    let over = tick(&s, &mut NoRandom);
    assert!(over.is_over());

    let fresh = restart(&over);
    let next = tick(&fresh, &mut NoRandom);
    assert_eq!(next.clock.tick(), 1);
    assert!(!next.is_over());
}

// ── tick — spawning & difficulty ──────────────────────────────────────────────

#[test]
fn no_spawn_before_the_interval() {
    let mut s = make_state();
    s.clock = Clock::at_tick(39); // next tick: 2000 ms
    let s2 = tick(&s, &mut NoRandom);
    assert!(s2.enemies.is_empty());
}

#[test]
fn spawn_on_first_due_check() {
    let mut s = make_state();
    s.clock = Clock::at_tick(59); // next tick: 3000 ms
    let mut rng = ScriptedRng::new(&[true], &[0.5]); // V, centered at 50
    let s2 = tick(&s, &mut rng);

    assert_eq!(s2.enemies.len(), 5);
    assert_eq!(s2.last_spawn_ms, 3000);
    assert_eq!(s2.next_id, s.next_id + 5);

    let xs: Vec<f32> = s2.enemies.iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![34.0, 42.0, 50.0, 58.0, 66.0]);
    // Spawned, then moved once by 0.3 in the same tick.
    let expected_y = [-15.0, -10.0, -5.0, -10.0, -15.0];
    for (e, y) in s2.enemies.iter().zip(expected_y) {
        assert!(approx(e.y, y + 0.3), "enemy {} at y={}", e.id, e.y);
    }
}

#[test]
fn spawns_only_on_spawn_check_ticks() {
    let mut s = make_state();
    s.clock = Clock::at_tick(60); // 3000 ms already passed, but tick 61 is not a check
    let s2 = tick(&s, &mut NoRandom);
    assert!(s2.enemies.is_empty());
}

#[test]
fn difficulty_steps_at_fifteen_seconds() {
    let mut s = make_state();
    s.clock = Clock::at_tick(299); // next tick: 15000 ms
    s.last_spawn_ms = 14_000;
    let s2 = tick(&s, &mut NoRandom);
    assert!(approx(s2.difficulty, 1.1));
    assert!(s2.enemies.is_empty());
}

#[test]
fn difficulty_never_drops_on_recompute() {
    let mut s = make_state();
    s.difficulty = 1.5;
    s.clock = Clock::at_tick(19); // 1000 ms, formula says 1.0
    let s2 = tick(&s, &mut NoRandom);
    assert_eq!(s2.difficulty, 1.5);
}

#[test]
fn higher_difficulty_shortens_spawn_interval() {
    let mut s = make_state();
    s.difficulty = 1.5; // interval 2000 ms
    s.clock = Clock::at_tick(39);
    let mut rng = ScriptedRng::new(&[false, true], &[]); // diagonal from the left
    let s2 = tick(&s, &mut rng);
    assert_eq!(s2.enemies.len(), 5);
    assert!(s2.enemies.iter().all(|e| e.dx > 0.0));
}

// ── snapshot ──────────────────────────────────────────────────────────────────

#[test]
fn snapshot_reflects_state() {
    let mut s = make_state();
    s.enemies.push(enemy(7, 10.0, 20.0, 0.5, 0.5));
    s.bullets.push(bullet(8, 30.0, 40.0));
    s.score = 30;
    s.difficulty = 1.2;

    let snap = snapshot(&s);
    assert_eq!(snap.player, s.player);
    assert_eq!(snap.enemies, vec![EntityView { id: 7, x: 10.0, y: 20.0 }]);
    assert_eq!(snap.bullets, vec![EntityView { id: 8, x: 30.0, y: 40.0 }]);
    assert_eq!(snap.score, 30);
    assert_eq!(snap.difficulty, 1.2);
    assert!(!snap.game_over);
}
