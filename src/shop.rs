use crate::cosmetics::{CATALOG, SnakeColor};
use crate::game::{Game, PurchaseOutcome};
use crate::store::StoreError;

/// Cursor over the color catalog plus the result of the last confirm.
#[derive(Debug, Default)]
pub struct Shop {
    selected: usize,
    status: Option<String>,
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SnakeColor {
        CATALOG[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + CATALOG.len() - 1) % CATALOG.len();
        self.status = None;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CATALOG.len();
        self.status = None;
    }

    /// Buys or equips the highlighted color.
    pub fn confirm(&mut self, game: &mut Game) -> Result<PurchaseOutcome, StoreError> {
        let color = self.selected();
        let outcome = game.purchase(color)?;
        self.status = Some(match outcome {
            PurchaseOutcome::Equipped => format!("{color} equipped"),
            PurchaseOutcome::Bought => format!("{color} unlocked!"),
            PurchaseOutcome::Rejected { price, coins } => {
                format!("Need {} more coins", price - coins)
            }
        });
        Ok(outcome)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Forgets the last status line, e.g. when the shop is reopened.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::store::{GameRecord, PersistentStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn game_with_coins(dir: &TempDir, coins: u32) -> Game {
        let path = dir.path().join("record.json");
        PersistentStore::new(&path)
            .save(&GameRecord {
                coins,
                ..GameRecord::default()
            })
            .unwrap();
        Game::new(GameConfig::with_record_path(path), StdRng::seed_from_u64(1))
    }

    #[test]
    fn navigation_wraps() {
        let mut shop = Shop::new();
        assert_eq!(shop.selected(), SnakeColor::Green);
        shop.select_prev();
        assert_eq!(shop.selected(), SnakeColor::Gold);
        shop.select_next();
        shop.select_next();
        assert_eq!(shop.selected(), SnakeColor::Blue);
        assert_eq!(shop.selected_index(), 1);
    }

    #[test]
    fn confirm_reports_shortfall() {
        let dir = TempDir::new().unwrap();
        let mut game = game_with_coins(&dir, 40);
        let mut shop = Shop::new();
        shop.select_next();

        let outcome = shop.confirm(&mut game).unwrap();
        assert!(matches!(outcome, PurchaseOutcome::Rejected { .. }));
        assert_eq!(shop.status(), Some("Need 10 more coins"));
        assert_eq!(game.record().coins, 40);
    }

    #[test]
    fn confirm_buys_then_equips() {
        let dir = TempDir::new().unwrap();
        let mut game = game_with_coins(&dir, 50);
        let mut shop = Shop::new();
        shop.select_next();

        assert_eq!(shop.confirm(&mut game).unwrap(), PurchaseOutcome::Bought);
        assert_eq!(shop.status(), Some("Blue unlocked!"));
        assert_eq!(shop.confirm(&mut game).unwrap(), PurchaseOutcome::Equipped);
        assert_eq!(game.record().coins, 0);
    }

    #[test]
    fn moving_clears_status() {
        let dir = TempDir::new().unwrap();
        let mut game = game_with_coins(&dir, 0);
        let mut shop = Shop::new();
        shop.confirm(&mut game).unwrap();
        assert_eq!(shop.status(), Some("Green equipped"));
        shop.select_next();
        assert_eq!(shop.status(), None);
    }
}
