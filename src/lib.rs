//! Snake with persistent coins and a cosmetic shop.
//!
//! Game logic (snake, food, scoring, shop, screen flow) is independent of the
//! window so it can be driven from tests; `render`, `input` and `sound` are
//! the thin macroquad-facing layers used by the binary.

pub mod background;
pub mod clock;
pub mod config;
pub mod cosmetics;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod particles;
pub mod render;
pub mod screen;
pub mod shop;
pub mod snake;
pub mod sound;
pub mod store;

pub use config::GameConfig;
pub use game::{Game, PurchaseOutcome, TickOutcome};
pub use screen::{App, Cue, Key, Screen};
pub use store::{GameRecord, PersistentStore, StoreError};
