use macroquad::input::{KeyCode, is_key_pressed};

use crate::screen::Key;

const BINDINGS: [(KeyCode, Key); 8] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::P, Key::Pause),
    (KeyCode::Space, Key::Confirm),
    (KeyCode::Escape, Key::Back),
    (KeyCode::S, Key::Shop),
];

/// Keys pressed since the previous frame, in binding order.
pub fn poll_keys() -> Vec<Key> {
    BINDINGS
        .iter()
        .filter(|(code, _)| is_key_pressed(*code))
        .map(|(_, key)| *key)
        .collect()
}
