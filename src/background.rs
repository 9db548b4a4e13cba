//! Scrolling starfield and the score-driven backdrop color.

use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::draw_circle;
use macroquad::window::clear_background;
use rand::Rng;

use crate::config::{BACKGROUND_BANDS, BAND_WIDTH};

#[derive(Debug, Clone, Copy)]
struct Star {
    pos: Vec2,
    speed: f32,
    radius: f32,
    brightness: f32,
}

#[derive(Debug)]
pub struct BackgroundManager {
    stars: Vec<Star>,
    width: f32,
    height: f32,
}

/// Backdrop color for a score: one of four bands, each `BAND_WIDTH` points
/// wide, the last one open ended.
pub fn color_for_score(score: u32) -> Color {
    let band = (score / BAND_WIDTH).min(BACKGROUND_BANDS.len() as u32 - 1);
    BACKGROUND_BANDS[band as usize]
}

impl BackgroundManager {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: vec2(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                speed: rng.gen_range(15.0..70.0),
                radius: rng.gen_range(0.6..1.8),
                brightness: rng.gen_range(0.3..0.9),
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, dt: f32) {
        for star in &mut self.stars {
            star.pos.x += star.speed * dt;
            if star.pos.x > self.width {
                star.pos.x -= self.width;
                star.pos.y = rng.gen_range(0.0..self.height);
            }
        }
    }

    pub fn draw(&self, score: u32) {
        clear_background(color_for_score(score));
        for star in &self.stars {
            let b = star.brightness;
            draw_circle(star.pos.x, star.pos.y, star.radius, Color::new(b, b, b, 0.8));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn four_score_bands() {
        assert_eq!(color_for_score(0), BACKGROUND_BANDS[0]);
        assert_eq!(color_for_score(9), BACKGROUND_BANDS[0]);
        assert_eq!(color_for_score(10), BACKGROUND_BANDS[1]);
        assert_eq!(color_for_score(25), BACKGROUND_BANDS[2]);
        assert_eq!(color_for_score(30), BACKGROUND_BANDS[3]);
        assert_eq!(color_for_score(1_000), BACKGROUND_BANDS[3]);
    }

    #[test]
    fn stars_wrap_inside_the_field() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bg = BackgroundManager::new(&mut rng, 200.0, 100.0, 30);
        assert_eq!(bg.stars.len(), 30);

        for _ in 0..500 {
            bg.update(&mut rng, 0.1);
        }
        for star in &bg.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x <= 200.0);
            assert!(star.pos.y >= 0.0 && star.pos.y < 100.0);
        }
    }

    #[test]
    fn stars_scroll_right() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut bg = BackgroundManager::new(&mut rng, 10_000.0, 100.0, 5);
        let before: Vec<f32> = bg.stars.iter().map(|s| s.pos.x).collect();
        bg.update(&mut rng, 0.01);
        for (star, x) in bg.stars.iter().zip(before) {
            assert!(star.pos.x > x);
        }
    }
}
