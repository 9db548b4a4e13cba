//! Screen state machine: Start, Playing, Paused, GameOver and the Shop modal.

use crate::clock::TickClock;
use crate::game::{Game, TickOutcome};
use crate::grid::Direction;
use crate::shop::Shop;
use crate::store::StoreError;

/// Discrete inputs, already decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Confirm,
    Back,
    Shop,
}

/// Where the shop returns to when closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Return {
    Start,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    GameOver,
    Shop { back: Return },
}

impl From<Return> for Screen {
    fn from(back: Return) -> Self {
        match back {
            Return::Start => Screen::Start,
            Return::GameOver => Screen::GameOver,
        }
    }
}

/// Sound-worthy events produced by [`App::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Die,
}

pub struct App {
    game: Game,
    shop: Shop,
    screen: Screen,
    clock: TickClock,
}

impl App {
    pub fn new(game: Game) -> Self {
        let clock = TickClock::new(game.config().tick_interval());
        Self {
            game,
            shop: Shop::new(),
            screen: Screen::Start,
            clock,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    fn goto(&mut self, next: Screen) {
        tracing::debug!(from = ?self.screen, to = ?next, "screen change");
        self.screen = next;
    }

    fn open_shop(&mut self, back: Return) {
        self.shop.clear_status();
        self.goto(Screen::Shop { back });
    }

    pub fn handle_key(&mut self, key: Key) -> Result<(), StoreError> {
        match self.screen {
            Screen::Start => match key {
                Key::Confirm => {
                    self.game.reset();
                    self.clock.reset();
                    tracing::info!("session started");
                    self.goto(Screen::Playing);
                }
                Key::Shop => self.open_shop(Return::Start),
                _ => {}
            },
            Screen::Playing => match key {
                Key::Up => self.game.queue_direction(Direction::Up),
                Key::Down => self.game.queue_direction(Direction::Down),
                Key::Left => self.game.queue_direction(Direction::Left),
                Key::Right => self.game.queue_direction(Direction::Right),
                Key::Pause | Key::Back => self.goto(Screen::Paused),
                _ => {}
            },
            Screen::Paused => {
                if matches!(key, Key::Pause | Key::Confirm) {
                    self.clock.reset();
                    self.goto(Screen::Playing);
                }
            }
            Screen::GameOver => match key {
                Key::Confirm | Key::Back => self.goto(Screen::Start),
                Key::Shop => self.open_shop(Return::GameOver),
                _ => {}
            },
            Screen::Shop { back } => match key {
                Key::Up => self.shop.select_prev(),
                Key::Down => self.shop.select_next(),
                Key::Confirm => {
                    self.shop.confirm(&mut self.game)?;
                }
                Key::Back => self.goto(back.into()),
                _ => {}
            },
        }
        Ok(())
    }

    /// Per-frame update. Steps the snake when a tick boundary is crossed
    /// while playing.
    pub fn update(&mut self, dt: f32) -> Result<Option<Cue>, StoreError> {
        self.game.update_effects(dt);
        if self.screen != Screen::Playing || !self.clock.advance(dt) {
            return Ok(None);
        }
        match self.game.tick()? {
            TickOutcome::Moved { ate: true } => Ok(Some(Cue::Eat)),
            TickOutcome::Moved { ate: false } => Ok(None),
            TickOutcome::GameOver => {
                self.goto(Screen::GameOver);
                Ok(Some(Cue::Die))
            }
        }
    }
}
