use anyhow::{Context, Result};
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;

use snake_shop::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use snake_shop::sound::Sounds;
use snake_shop::{App, Game, GameConfig, input, render};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

async fn run() -> Result<()> {
    let config = GameConfig::default();
    tracing::info!(record = %config.record_path.display(), "starting snake");

    let sounds = match Sounds::load().await {
        Ok(sounds) => Some(sounds),
        Err(err) => {
            tracing::warn!(%err, "audio unavailable, playing silent");
            None
        }
    };

    let mut app = App::new(Game::new(config, StdRng::from_entropy()));
    prevent_quit();

    loop {
        if is_quit_requested() {
            tracing::info!("quit requested");
            break;
        }

        for key in input::poll_keys() {
            app.handle_key(key).context("failed to save record")?;
        }
        let cue = app
            .update(get_frame_time())
            .context("failed to save record")?;
        if let (Some(cue), Some(sounds)) = (cue, sounds.as_ref()) {
            sounds.play(cue);
        }

        render::draw(&app);
        next_frame().await;
    }
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
