//! Vectoroids entry point
//!
//! Headless native runner: plays a fixed number of frames in idle mode,
//! rendering into an off-screen frame buffer.
//!
//! Usage: `vectoroids [settings.json]`

use vectoroids::Game;
use vectoroids::consts::FRAME_DT;
use vectoroids::platform::ScriptedHost;
use vectoroids::renderer::FrameBuffer;
use vectoroids::settings::Settings;

/// One minute at 60 Hz
const RUN_FRAMES: u64 = 3600;
/// Stats logged once per simulated second
const REPORT_EVERY: u64 = 60;

fn main() {
    env_logger::init();
    log::info!("Vectoroids (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path, e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    settings.idle_mode = true;

    let mut game = Game::initialize(settings);
    let mut host = ScriptedHost::new();
    let mut frame = FrameBuffer::new();

    for n in 1..=RUN_FRAMES {
        game.update(&mut host, FRAME_DT);
        game.render(&mut frame);

        if n % REPORT_EVERY == 0 {
            let state = game.state();
            log::info!(
                "Frame {} (tick {}): score {}, health {}, wave {}, {} asteroids, {} lit pixels",
                n,
                state.time_ticks,
                state.score,
                state.health,
                state.wave,
                state.asteroids.len(),
                frame.lit_pixels()
            );
        }

        if host.quit_requested() {
            log::info!("Quit requested at frame {}", n);
            break;
        }
    }

    game.finalize();
}
