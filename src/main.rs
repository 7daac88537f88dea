//! Egg Hatch headless driver
//!
//! Plays a scripted session against the engine at a fixed 60 Hz frame rate:
//! one crack report per second until the egg is full, then the user taps every
//! frame until the creature is revealed.
//!
//! Usage: `egg-hatch [settings.json]`

use egg_hatch::consts::FRAME_DT;
use egg_hatch::sim::{CrackSet, HatchPhase};
use egg_hatch::{EggProgress, HatchEngine, HatchError, HatchSettings};

/// Frames between crack reports
const FRAMES_PER_REPORT: u32 = 60;
/// Upper bound on simulated frames
const MAX_FRAMES: u32 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Egg Hatch (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HatchError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => HatchSettings::load(path)?,
        None => {
            log::info!("Using default settings");
            HatchSettings::default()
        }
    };
    let max_cracks = settings.max_cracks;
    let mut engine = HatchEngine::new(settings)?;

    let mut cracks = CrackSet::new();
    let mut last_phase = engine.phase();

    for frame in 0..MAX_FRAMES {
        if frame % FRAMES_PER_REPORT == 0 && cracks.len() < max_cracks {
            cracks.push(format!("/cracks/transparent-{}.png", cracks.len() + 1));
            let progress = EggProgress::new(cracks.len(), max_cracks);
            log::info!(
                "Crack reported ({}/{}, {:.0}%)",
                progress.cracks,
                progress.needed,
                progress.percent()
            );
        }

        let tap = cracks.len() >= max_cracks;
        let snapshot = engine.advance(FRAME_DT, &cracks, tap)?;

        if snapshot.phase != last_phase {
            log::info!(
                "Frame {}: {} -> {} ({})",
                frame,
                last_phase.as_str(),
                snapshot.phase.as_str(),
                snapshot.phase.status_message()
            );
            last_phase = snapshot.phase;
        }
        if snapshot.phase == HatchPhase::Hatching {
            log::debug!(
                "Frame {}: bloom {:.3}, float {:.3}",
                frame,
                snapshot.bloom_intensity,
                snapshot.float_height
            );
        }

        if snapshot.hatched_triggered {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }
    }

    log::warn!("Egg did not hatch within {} frames", MAX_FRAMES);
    Ok(())
}
