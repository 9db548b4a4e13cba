use macroquad::prelude::*;

use crate::config::{COIN_COLOR, FOOD_COLOR, HUD_COLOR, HUD_DIM, OVERLAY, SEGMENT_SIZE};
use crate::cosmetics::CATALOG;
use crate::game::Game;
use crate::screen::{App, Screen};

pub fn draw(app: &App) {
    let game = app.game();
    game.background().draw(game.score());

    match app.screen() {
        Screen::Start => draw_start(game),
        Screen::Playing => {
            draw_board(game);
            draw_hud(game);
        }
        Screen::Paused => {
            draw_board(game);
            draw_hud(game);
            dim();
            let y = screen_height() * 0.45;
            centered("PAUSED", y, 40, HUD_COLOR);
            centered("P / Space: Resume", y + 36.0, 20, HUD_DIM);
        }
        Screen::GameOver => {
            draw_board(game);
            dim();
            draw_game_over(game);
        }
        Screen::Shop { .. } => draw_shop(app),
    }
}

fn draw_board(game: &Game) {
    let color = game.equipped();
    for (i, cell) in game.snake().segments().enumerate() {
        let c = if i == 0 { color.color() } else { color.body_color() };
        let r = cell.to_rect();
        draw_rectangle(r.x, r.y, r.w, r.h, c);
    }

    let food = game.food().position().to_rect();
    draw_rectangle(food.x, food.y, food.w, food.h, FOOD_COLOR);

    game.particles().draw();
}

fn draw_hud(game: &Game) {
    let record = game.record();
    draw_text(&format!("Score: {}", game.score()), 10.0, 30.0, 36.0, HUD_COLOR);
    draw_text(&format!("Best: {}", record.high_score), 10.0, 56.0, 22.0, HUD_DIM);

    let coins = format!("Coins: {}", record.coins);
    let m = measure_text(&coins, None, 24, 1.0);
    draw_text(&coins, screen_width() - m.width - 10.0, 30.0, 24.0, COIN_COLOR);
}

fn draw_start(game: &Game) {
    let sh = screen_height();
    let color = game.equipped();
    let mut y = sh * 0.3;
    centered("SNAKE", y, 64, color.color());
    y += 60.0;
    centered("Space: Start", y, 24, HUD_COLOR);
    y += 30.0;
    centered("S: Shop", y, 24, HUD_COLOR);
    y += 30.0;
    centered("Arrows: Move   P: Pause", y, 20, HUD_DIM);

    let record = game.record();
    centered(&format!("Best: {}", record.high_score), sh - 64.0, 22, HUD_DIM);
    centered(&format!("Coins: {}", record.coins), sh - 40.0, 22, COIN_COLOR);
}

fn draw_game_over(game: &Game) {
    let y = screen_height() * 0.4;
    centered("GAME OVER", y, 48, FOOD_COLOR);
    centered(&format!("Score: {}", game.score()), y + 44.0, 28, HUD_COLOR);
    centered(
        &format!("Best: {}   Coins: {}", game.record().high_score, game.record().coins),
        y + 76.0,
        22,
        HUD_DIM,
    );
    centered("Space: Menu   S: Shop", y + 112.0, 22, HUD_COLOR);
}

fn draw_shop(app: &App) {
    let game = app.game();
    let shop = app.shop();
    let record = game.record();
    let sw = screen_width();

    let mut y = screen_height() * 0.2;
    centered("SHOP", y, 48, HUD_COLOR);
    y += 36.0;
    centered(&format!("Coins: {}", record.coins), y, 24, COIN_COLOR);
    y += 48.0;

    for (i, color) in CATALOG.iter().enumerate() {
        let selected = i == shop.selected_index();
        let tag = if game.equipped() == *color {
            "equipped".to_string()
        } else if record.is_unlocked(*color) {
            "owned".to_string()
        } else {
            format!("{} coins", color.price())
        };
        let line = format!("{}{:<8} {}", if selected { "> " } else { "  " }, color.name(), tag);
        let text_color = if selected { HUD_COLOR } else { HUD_DIM };

        let m = measure_text(&line, None, 26, 1.0);
        let x = (sw - m.width) * 0.5;
        let swatch = SEGMENT_SIZE as f32;
        draw_rectangle(x - swatch - 12.0, y - swatch + 2.0, swatch, swatch, color.color());
        draw_text(&line, x, y, 26.0, text_color);
        y += 34.0;
    }

    y += 16.0;
    if let Some(status) = shop.status() {
        centered(status, y, 22, COIN_COLOR);
    }
    centered("Up/Down: Select   Space: Buy/Equip   Esc: Back", screen_height() - 40.0, 20, HUD_DIM);
}

fn dim() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY);
}

fn centered(text: &str, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size as f32, color);
}
