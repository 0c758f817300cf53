//! Legends: Monsters & Heroes.
//!
//! Composition root: loads content from the data directory, seeds the RNG
//! and hands the terminal to the session loop.
//!
//! ```bash
//! LEGENDS_SEED=42 RUST_LOG=debug cargo run -p legends-client
//! ```

use anyhow::Result;
use game_content::ContentFactory;
use game_core::PcgRng;
use legends_client::logging::setup_logging;
use legends_client::{Board, ClientConfig, ConsoleSink, Session, TerminalInput, select_party};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();

    // 2. Setup logging
    setup_logging(client_config.log_dir.as_deref())?;

    let seed = client_config.seed_or_random();
    tracing::info!("Starting Legends");
    tracing::info!("Data directory: {}", client_config.data_dir.display());
    tracing::info!("Seed: {seed}");

    // 3. Load content
    let factory = ContentFactory::new(client_config.data_dir.clone());
    let game_config = factory.load_config()?;
    let catalog = factory.load_catalog()?;

    // 4. Wire collaborators
    let mut rng = PcgRng::seeded(seed);
    let mut input = TerminalInput::stdio();
    let mut output = ConsoleSink::stdout();

    // 5. Assemble the session
    let mut pool = catalog.hero_pool();
    let party = select_party(&mut pool, &mut input, &mut output)?;
    let board = Board::generate(&game_config.world, &mut rng);
    let mut session = Session::new(game_config, catalog, board, party);

    // 6. Play
    let end = session.run(&mut rng, &mut input, &mut output)?;

    tracing::info!("Session ended: {end}");
    Ok(())
}
