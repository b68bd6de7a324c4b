#![allow(dead_code)]

use std::collections::VecDeque;

use arcade_shooter::spawner::RandomSource;

/// Replays a fixed list of choices; panics when the script runs out.
pub struct ScriptedRng {
    coins: VecDeque<bool>,
    units: VecDeque<f32>,
}

impl ScriptedRng {
    pub fn new(coins: &[bool], units: &[f32]) -> Self {
        Self {
            coins: coins.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().expect("script out of units")
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().expect("script out of coins")
    }
}

/// For ticks that must not spawn anything.
pub struct NoRandom;

impl RandomSource for NoRandom {
    fn unit(&mut self) -> f32 {
        panic!("unexpected random draw")
    }

    fn coin(&mut self) -> bool {
        panic!("unexpected random draw")
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
