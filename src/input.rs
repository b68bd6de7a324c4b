//! Key name → intent mapping.  Stateless; the store decides what an intent
//! does (and ignores it after game over).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    None,
}

/// Map a platform key name to an intent.  Unmapped keys are `Intent::None`.
///
/// | intent | keys                    |
/// |--------|-------------------------|
/// | up     | `ArrowUp`, `w`, `8`     |
/// | down   | `ArrowDown`, `s`, `2`   |
/// | left   | `ArrowLeft`, `a`, `4`   |
/// | right  | `ArrowRight`, `d`, `6`  |
/// | fire   | `Space` (or `" "`)      |
pub fn map_key(key: &str) -> Intent {
    match key {
        "ArrowUp" | "w" | "8" => Intent::MoveUp,
        "ArrowDown" | "s" | "2" => Intent::MoveDown,
        "ArrowLeft" | "a" | "4" => Intent::MoveLeft,
        "ArrowRight" | "d" | "6" => Intent::MoveRight,
        "Space" | " " => Intent::Fire,
        _ => Intent::None,
    }
}
