//! Decorative particle bursts. Nothing here feeds back into gameplay.

use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::draw_circle;
use rand::Rng;

use crate::config::MAX_PARTICLES;

const SHRINK_RATE: f32 = 6.0; // size lost per second
const DRAG: f32 = 0.92; // velocity kept per 1/60 s

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    max_life: f32,
    size: f32,
    color: Color,
}

impl Particle {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel *= DRAG.powf(dt * 60.0);
        self.life -= dt;
        self.size = (self.size - SHRINK_RATE * dt).max(0.0);
    }

    fn alive(&self) -> bool {
        self.life > 0.0 && self.size > 0.0
    }

    fn draw(&self) {
        let fade = (self.life / self.max_life).clamp(0.0, 1.0);
        let color = Color::new(self.color.r, self.color.g, self.color.b, self.color.a * fade);
        draw_circle(self.pos.x, self.pos.y, self.size, color);
    }
}

#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `count` particles flying outwards from `origin` (screen pixels).
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, origin: Vec2, color: Color, count: usize) {
        for _ in 0..count {
            let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(40.0..180.0);
            let life: f32 = rng.gen_range(0.35..0.8);
            self.particles.push(Particle {
                pos: origin,
                vel: vec2(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
                size: rng.gen_range(2.0..4.5),
                color,
            });
        }
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.update(dt);
        }
        self.particles.retain(Particle::alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn draw(&self) {
        for p in &self.particles {
            p.draw();
        }
    }
}
