//! Per-session game state and the persistent record it feeds.

use macroquad::color::Color;
use macroquad::math::vec2;
use rand::rngs::StdRng;

use crate::background::{self, BackgroundManager};
use crate::config::{FOOD_BURST, FOOD_COLOR, GameConfig, STAR_COUNT, TILE_SIZE};
use crate::cosmetics::SnakeColor;
use crate::food::Food;
use crate::grid::Direction;
use crate::particles::ParticleSystem;
use crate::snake::Snake;
use crate::store::{GameRecord, PersistentStore, StoreError};

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { ate: bool },
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Already owned; now equipped.
    Equipped,
    /// Paid for, unlocked and equipped.
    Bought,
    /// Not enough coins. Nothing changed.
    Rejected { price: u32, coins: u32 },
}

pub struct Game {
    config: GameConfig,
    store: PersistentStore,
    record: GameRecord,
    snake: Snake,
    food: Food,
    particles: ParticleSystem,
    background: BackgroundManager,
    score: u32,
    equipped: SnakeColor,
    next_direction: Option<Direction>,
    alive: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let store = PersistentStore::new(config.record_path.clone());
        let record = store.load();
        let background = BackgroundManager::new(
            &mut rng,
            (config.grid_width * TILE_SIZE) as f32,
            (config.grid_height * TILE_SIZE) as f32,
            STAR_COUNT,
        );
        let center = config.center();
        let mut game = Self {
            snake: Snake::new(center, Direction::Right),
            food: Food::new(center),
            particles: ParticleSystem::new(),
            background,
            score: 0,
            equipped: SnakeColor::default(),
            next_direction: None,
            alive: true,
            config,
            store,
            record,
            rng,
        };
        game.reset();
        game
    }

    /// Starts a fresh session: centered snake heading right, new food, zero
    /// score. The persisted record is untouched.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.center(), Direction::Right);
        self.relocate_food();
        self.score = 0;
        self.next_direction = None;
        self.alive = true;
        self.particles.clear();
    }

    /// Remembers a heading change for the next tick. Reversals of the current
    /// heading are dropped so they cannot overwrite an earlier valid press.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.snake.direction().is_opposite(direction) {
            return;
        }
        self.next_direction = Some(direction);
    }

    pub fn tick(&mut self) -> Result<TickOutcome, StoreError> {
        if !self.alive {
            return Ok(TickOutcome::GameOver);
        }

        if let Some(direction) = self.next_direction.take() {
            self.snake.set_direction(direction);
        }
        self.snake.advance();

        let head = self.snake.head();
        let ate = self.food.is_eaten_by(head);
        if ate {
            self.eat()?;
        }

        let in_bounds = head.in_bounds(self.config.grid_width, self.config.grid_height);
        if !in_bounds || self.snake.self_collision() {
            self.alive = false;
            tracing::info!(
                score = self.score,
                high_score = self.record.high_score,
                wall = !in_bounds,
                "game over"
            );
            return Ok(TickOutcome::GameOver);
        }
        Ok(TickOutcome::Moved { ate })
    }

    fn eat(&mut self) -> Result<(), StoreError> {
        let eaten_at = self.food.position();
        self.snake.grow();
        self.relocate_food();

        self.score += 1;
        self.record.coins = self.record.coins.saturating_add(1);
        let new_best = self.record.offer_score(self.score);
        self.store.save(&self.record)?;
        tracing::debug!(score = self.score, coins = self.record.coins, new_best, "food eaten");

        let (x, y) = eaten_at.center_px();
        self.particles
            .burst(&mut self.rng, vec2(x, y), FOOD_COLOR, FOOD_BURST);
        Ok(())
    }

    fn relocate_food(&mut self) {
        let snake = &self.snake;
        let placed = self.food.relocate(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            |cell| snake.occupies(cell),
        );
        if !placed {
            tracing::debug!("board full, food left in place");
        }
    }

    /// Advances the purely cosmetic layers. Runs every frame on every screen.
    pub fn update_effects(&mut self, dt: f32) {
        self.particles.update(dt);
        self.background.update(&mut self.rng, dt);
    }

    /// Buys or equips `color`.
    pub fn purchase(&mut self, color: SnakeColor) -> Result<PurchaseOutcome, StoreError> {
        if self.record.is_unlocked(color) {
            self.equipped = color;
            tracing::info!(%color, "equipped");
            return Ok(PurchaseOutcome::Equipped);
        }

        let price = color.price();
        if self.record.coins < price {
            tracing::info!(%color, price, coins = self.record.coins, "purchase rejected");
            return Ok(PurchaseOutcome::Rejected {
                price,
                coins: self.record.coins,
            });
        }

        let mut next = self.record.clone();
        next.coins -= price;
        next.unlock(color);
        self.store.save(&next)?;
        self.record = next;
        self.equipped = color;
        tracing::info!(%color, price, coins = self.record.coins, "purchased");
        Ok(PurchaseOutcome::Bought)
    }

    /// Equips an owned color. Returns false for locked colors.
    pub fn equip(&mut self, color: SnakeColor) -> bool {
        if !self.record.is_unlocked(color) {
            return false;
        }
        self.equipped = color;
        true
    }

    pub fn background_color(&self) -> Color {
        background::color_for_score(self.score)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn background(&self) -> &BackgroundManager {
        &self.background
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn equipped(&self) -> SnakeColor {
        self.equipped
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn game_in(dir: &TempDir) -> Game {
        let config = GameConfig::with_record_path(dir.path().join("record.json"));
        Game::new(config, StdRng::seed_from_u64(42))
    }

    fn with_coins(dir: &TempDir, coins: u32) -> Game {
        let store = PersistentStore::new(dir.path().join("record.json"));
        store
            .save(&GameRecord {
                coins,
                ..GameRecord::default()
            })
            .unwrap();
        game_in(dir)
    }

    fn food_ahead(game: &mut Game) {
        let ahead = game.snake.head().step(game.snake.direction());
        game.food = Food::new(ahead);
    }

    #[test]
    fn fresh_game_eats_once() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        assert_eq!(game.snake().head(), Cell::new(20, 15));
        assert_eq!(game.snake().direction(), Direction::Right);

        food_ahead(&mut game);
        assert_eq!(game.tick().unwrap(), TickOutcome::Moved { ate: true });
        assert_eq!(game.score(), 1);
        assert_eq!(game.record().coins, 1);
        assert_eq!(game.record().high_score, 1);
        assert!(!game.particles().is_empty());

        // growth lands on the following step
        assert_ne!(game.food().position(), game.snake().head());
        game.food = Food::new(Cell::new(0, 0));
        game.tick().unwrap();
        assert_eq!(game.snake().len(), 2);

        let saved = PersistentStore::new(dir.path().join("record.json")).load();
        assert_eq!(saved.coins, 1);
        assert_eq!(saved.high_score, 1);
    }

    #[test]
    fn length_tracks_food_eaten() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        for eaten in 0..4 {
            food_ahead(&mut game);
            game.tick().unwrap();
            assert_eq!(game.snake().len(), 1 + eaten);
            // park food away from the path
            game.food = Food::new(Cell::new(0, 0));
            game.tick().unwrap();
            assert_eq!(game.snake().len(), 2 + eaten);
        }
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn running_into_right_wall_ends_game() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        game.food = Food::new(Cell::new(0, 0));

        let steps_to_edge = game.config().grid_width - 1 - game.snake().head().x;
        for _ in 0..steps_to_edge {
            assert!(matches!(game.tick().unwrap(), TickOutcome::Moved { .. }));
        }
        assert_eq!(game.tick().unwrap(), TickOutcome::GameOver);
        assert!(!game.is_alive());
        assert_eq!(game.snake().head().x, game.config().grid_width);

        // dead sessions stay dead
        let head = game.snake().head();
        assert_eq!(game.tick().unwrap(), TickOutcome::GameOver);
        assert_eq!(game.snake().head(), head);
    }

    #[test]
    fn running_into_top_wall_ends_game() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        game.food = Food::new(Cell::new(0, 29));
        game.queue_direction(Direction::Up);
        let mut outcome = game.tick().unwrap();
        while outcome != TickOutcome::GameOver {
            outcome = game.tick().unwrap();
        }
        assert_eq!(game.snake().head().y, -1);
    }

    #[test]
    fn biting_itself_ends_game() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        let cells = (0..5).map(|i| Cell::new(10 - i, 10));
        game.snake = Snake::from_segments(cells, Direction::Right).unwrap();
        game.food = Food::new(Cell::new(0, 0));

        game.queue_direction(Direction::Down);
        assert!(matches!(game.tick().unwrap(), TickOutcome::Moved { .. }));
        game.queue_direction(Direction::Left);
        assert!(matches!(game.tick().unwrap(), TickOutcome::Moved { .. }));
        game.queue_direction(Direction::Up);
        assert_eq!(game.tick().unwrap(), TickOutcome::GameOver);
    }

    #[test]
    fn reversal_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        game.food = Food::new(Cell::new(0, 0));
        let start = game.snake().head();

        game.queue_direction(Direction::Left);
        game.tick().unwrap();
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.snake().head(), start.step(Direction::Right));
    }

    #[test]
    fn invalid_press_keeps_earlier_valid_one() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        game.food = Food::new(Cell::new(0, 0));

        game.queue_direction(Direction::Up);
        game.queue_direction(Direction::Left);
        game.tick().unwrap();
        assert_eq!(game.snake().direction(), Direction::Up);
    }

    #[test]
    fn high_score_survives_lower_session() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        for _ in 0..3 {
            food_ahead(&mut game);
            game.tick().unwrap();
        }
        assert_eq!(game.record().high_score, 3);

        game.reset();
        assert_eq!(game.score(), 0);
        food_ahead(&mut game);
        game.tick().unwrap();
        assert_eq!(game.record().high_score, 3);
        assert_eq!(game.record().coins, 4);
    }

    #[test]
    fn purchase_rejected_without_funds() {
        let dir = TempDir::new().unwrap();
        let mut game = with_coins(&dir, 40);

        let outcome = game.purchase(SnakeColor::Blue).unwrap();
        assert_eq!(outcome, PurchaseOutcome::Rejected { price: 50, coins: 40 });
        assert_eq!(game.record().coins, 40);
        assert!(!game.record().is_unlocked(SnakeColor::Blue));
        assert_eq!(game.equipped(), SnakeColor::Green);
    }

    #[test]
    fn purchase_with_exact_funds() {
        let dir = TempDir::new().unwrap();
        let mut game = with_coins(&dir, 50);

        assert_eq!(game.purchase(SnakeColor::Blue).unwrap(), PurchaseOutcome::Bought);
        assert_eq!(game.record().coins, 0);
        assert!(game.record().is_unlocked(SnakeColor::Blue));
        assert_eq!(game.equipped(), SnakeColor::Blue);

        let saved = PersistentStore::new(dir.path().join("record.json")).load();
        assert_eq!(saved.coins, 0);
        assert!(saved.is_unlocked(SnakeColor::Blue));
    }

    #[test]
    fn owned_color_equips_for_free() {
        let dir = TempDir::new().unwrap();
        let mut game = with_coins(&dir, 120);
        game.purchase(SnakeColor::Purple).unwrap();
        assert_eq!(game.record().coins, 20);

        assert_eq!(game.purchase(SnakeColor::Green).unwrap(), PurchaseOutcome::Equipped);
        assert_eq!(game.equipped(), SnakeColor::Green);
        assert_eq!(game.purchase(SnakeColor::Purple).unwrap(), PurchaseOutcome::Equipped);
        assert_eq!(game.record().coins, 20);
    }

    #[test]
    fn equip_requires_unlock() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        assert!(!game.equip(SnakeColor::Gold));
        assert!(game.equip(SnakeColor::Green));
    }

    #[test]
    fn reset_keeps_record() {
        let dir = TempDir::new().unwrap();
        let mut game = with_coins(&dir, 9);
        food_ahead(&mut game);
        game.tick().unwrap();
        game.reset();
        assert_eq!(game.record().coins, 10);
        assert_eq!(game.snake().len(), 1);
        assert!(game.is_alive());
        assert!(game.particles().is_empty());
    }

    #[test]
    fn background_follows_score() {
        let dir = TempDir::new().unwrap();
        let mut game = game_in(&dir);
        let start = game.background_color();
        for _ in 0..10 {
            food_ahead(&mut game);
            game.tick().unwrap();
        }
        assert_ne!(game.background_color(), start);
    }
}
