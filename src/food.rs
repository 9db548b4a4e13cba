use rand::Rng;

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_eaten_by(&self, head: Cell) -> bool {
        self.position == head
    }

    /// Moves the food to a uniformly random free cell of a `width` x `height`
    /// board. Cells for which `occupied` returns true are never chosen; on a
    /// full board the food stays put and `false` is returned.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: i32,
        height: i32,
        occupied: impl Fn(Cell) -> bool,
    ) -> bool {
        let free: Vec<Cell> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .filter(|c| !occupied(*c))
            .collect();
        if free.is_empty() {
            return false;
        }
        self.position = free[rng.gen_range(0..free.len())];
        true
    }
}
