/// Fixed-rate tick gate driven by frame deltas.
///
/// The game renders every frame but only steps the snake when a tick
/// boundary has been crossed. At most one tick fires per frame; a slow frame
/// does not trigger catch-up steps.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: f32,
    accumulated: f32,
}

impl TickClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            accumulated: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Adds `dt` seconds and reports whether a tick is due.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated < self.interval {
            return false;
        }
        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
        }
        true
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
