//! Shooting Game entry point
//!
//! On the web the game is driven from JavaScript through `platform::web`.
//! The native binary runs a headless attract-mode session:
//!
//! ```text
//! shooting-game [FRAMES] [SEED]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shooting_game::Game;
    use shooting_game::platform::FileStore;
    use shooting_game::sim::{GamePhase, demo_input};

    env_logger::init();
    log::info!("Shooting Game (native) starting...");

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next().map(|a| a.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Invalid frame count: {}", e);
            std::process::exit(2);
        }
        None => DEFAULT_FRAMES,
    };
    let seed: u64 = match args.next().map(|a| a.parse()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Invalid seed: {}", e);
            std::process::exit(2);
        }
        None => rand::random(),
    };

    let store = FileStore::default_location();
    log::info!("Storage directory: {}", store.dir().display());
    let mut game = Game::with_seed(store, seed);

    let mut runs = 0u32;
    let mut best = 0u64;
    let mut last_phase = game.phase();
    for _ in 0..frames {
        game.set_input(demo_input(game.state()));
        game.frame();

        let phase = game.phase();
        if phase == GamePhase::Playing && last_phase != GamePhase::Playing {
            runs += 1;
        }
        last_phase = phase;
        best = best.max(game.score());
    }

    log::info!(
        "Ran {} frames (seed {}): {} runs, phase {}, score {}, best this session {}, hi score {}",
        frames,
        seed,
        runs,
        game.phase().as_str(),
        game.score(),
        best,
        game.hi_score()
    );

    match game.snapshot_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
