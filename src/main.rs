//! Squid Rescue entry point
//!
//! Loads the font, runs the window until the player quits and, when they chose
//! "quit and save", records the score on the console afterwards.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use squid_rescue::consts::{FONT_PATH, LEADERBOARD_PATH};
use squid_rescue::leaderboard::{SaveOutcome, save_score};
use squid_rescue::prompt::{ConsolePrompt, ask_player_name};
use squid_rescue::renderer::TextRenderer;
use squid_rescue::{Flow, Game, platform};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = TextRenderer::load(FONT_PATH).context("load required assets")?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let game = Game::new(seed, LEADERBOARD_PATH);
    let (game, flow) = platform::run(game, text)?;

    if flow == (Flow::Quit { save: true }) {
        let score = game.session.score;
        let mut prompt = ConsolePrompt;
        let name = ask_player_name(&mut prompt).context("read player name")?;
        let outcome = save_score(LEADERBOARD_PATH, &name, score, &mut prompt)
            .with_context(|| format!("save score to {}", LEADERBOARD_PATH))?;
        match outcome {
            SaveOutcome::Inserted | SaveOutcome::Overwritten => {
                log::info!("Saved {} points for '{}'", score, name)
            }
            SaveOutcome::Declined => log::info!("Score not saved"),
        }
    }

    log::info!("Goodbye");
    Ok(())
}
