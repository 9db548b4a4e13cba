//! Snake colors sold in the shop.

use macroquad::color::Color;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SnakeColor {
    #[default]
    Green,
    Blue,
    Purple,
    Gold,
}

/// Shop order.
pub const CATALOG: [SnakeColor; 4] = [
    SnakeColor::Green,
    SnakeColor::Blue,
    SnakeColor::Purple,
    SnakeColor::Gold,
];

impl SnakeColor {
    pub fn name(self) -> &'static str {
        match self {
            SnakeColor::Green => "Green",
            SnakeColor::Blue => "Blue",
            SnakeColor::Purple => "Purple",
            SnakeColor::Gold => "Gold",
        }
    }

    pub fn price(self) -> u32 {
        match self {
            SnakeColor::Green => 0,
            SnakeColor::Blue => 50,
            SnakeColor::Purple => 100,
            SnakeColor::Gold => 200,
        }
    }

    /// Head color.
    pub fn color(self) -> Color {
        match self {
            SnakeColor::Green => Color::new(0.0, 1.0, 0.0, 1.0),
            SnakeColor::Blue => Color::new(0.2, 0.55, 1.0, 1.0),
            SnakeColor::Purple => Color::new(0.7, 0.3, 1.0, 1.0),
            SnakeColor::Gold => Color::new(1.0, 0.84, 0.0, 1.0),
        }
    }

    /// Darkened variant used for trailing segments.
    pub fn body_color(self) -> Color {
        let c = self.color();
        Color::new(c.r * 0.78, c.g * 0.78, c.b * 0.78, c.a)
    }

    pub fn from_name(name: &str) -> Option<SnakeColor> {
        CATALOG.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for SnakeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
