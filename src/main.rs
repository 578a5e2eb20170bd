//! Snowboarder entry point
//!
//! The browser build starts from `platform::web::wasm_main`. Natively the
//! game runs headless on simulated time with a random rider, logs progress,
//! and prints the final frame as JSON.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use snowboarder::consts::FPS;
    use snowboarder::platform::run_seed;
    use snowboarder::renderer::{LogRenderer, Renderer};
    use snowboarder::{Command, Session, Settings, WorldBounds};

    /// Simulated display refresh rate
    const DISPLAY_HZ: f64 = 144.0;
    /// Give up after two minutes of simulated play
    const MAX_TICKS: u64 = FPS as u64 * 120;

    env_logger::init();
    log::info!("Snowboarder (headless) starting...");

    let settings = Settings::load();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| match arg.parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("Ignoring seed argument {:?}: {}", arg, e);
                None
            }
        })
        .unwrap_or_else(|| run_seed(settings.seed));

    let mut session = Session::new(WorldBounds::default(), &settings);
    let mut renderer = LogRenderer::new(u64::from(settings.target_fps));
    let mut rider = Pcg32::seed_from_u64(seed.wrapping_add(1));

    let mut now = 0.0;
    session.start(seed, now);

    while let Some(state) = session.state() {
        if state.is_over() || state.time_ticks >= MAX_TICKS {
            break;
        }

        now += 1000.0 / DISPLAY_HZ;
        if session.on_frame(now).is_none() {
            continue;
        }

        // A key press roughly three times a second
        if rider.random_ratio(1, 20) {
            let command = Command::ALL[rider.random_range(0..Command::ALL.len())];
            session.push_command(command);
        }

        if let Some(frame) = session.frame_view() {
            renderer.render(&frame);
        }
    }

    if let Some(frame) = session.frame_view() {
        log::info!("Finished after {} ticks with {}", frame.tick, frame.score_label());
        match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize final frame: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
