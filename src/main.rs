//! Rocket Boost entry point
//!
//! Headless run: plays a short scripted flight through the levels with the
//! built-in level layout. Usage: `rocket-boost [settings.json]`

use rocket_boost::consts::FRAME_DT;
use rocket_boost::sim::{ContactTag, Game, Key, LevelLoader, RocketState};
use rocket_boost::{Settings, SetupError};

/// One scripted step
enum Step {
    Press(Key),
    Release(Key),
    Fly(f32),
    Touch(ContactTag),
    /// Run frames until the rocket is alive again
    AwaitRespawn,
}

fn script() -> Vec<Step> {
    use Step::*;
    vec![
        // Level 1: lift off, lean, land on the pad
        Press(Key::Space),
        Fly(1.0),
        Press(Key::A),
        Fly(0.25),
        Release(Key::A),
        Release(Key::Space),
        Fly(0.5),
        Touch(ContactTag::Friendly),
        Touch(ContactTag::Finish),
        AwaitRespawn,
        // Level 2: clip a wall
        Press(Key::Space),
        Press(Key::D),
        Fly(0.5),
        Touch(ContactTag::Hazard),
        Release(Key::Space),
        Release(Key::D),
        AwaitRespawn,
    ]
}

fn run(settings: Settings) -> Result<(), SetupError> {
    let mut game = Game::new(settings)?;
    let max_wait = (game.settings().level_load_delay / FRAME_DT).ceil() as usize + 1;

    for step in script() {
        match step {
            Step::Press(key) => game.press(key),
            Step::Release(key) => game.release(key),
            Step::Fly(seconds) => {
                let frames = (seconds / FRAME_DT).round() as usize;
                for _ in 0..frames {
                    game.frame(FRAME_DT)?;
                }
                let body = game.rocket().body();
                log::info!(
                    "Level {} t={:.2}s pos=({:.1}, {:.1}) up=({:.2}, {:.2})",
                    game.levels().current_index(),
                    game.clock().elapsed(),
                    body.position.x,
                    body.position.y,
                    body.up().x,
                    body.up().y
                );
            }
            Step::Touch(tag) => {
                log::info!("Contact: {:?}", tag);
                game.collide(tag);
            }
            Step::AwaitRespawn => {
                for _ in 0..max_wait {
                    if game.rocket().state() == RocketState::Alive {
                        break;
                    }
                    game.frame(FRAME_DT)?;
                }
            }
        }
    }

    log::info!(
        "Finished on level {} after {} frames",
        game.levels().current_index(),
        game.frames()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Rocket Boost (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    };

    let result = settings.and_then(run);
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
