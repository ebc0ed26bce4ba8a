//! Headless runner for the line art animation
//!
//! Drives the same scene as the browser app with a virtual frame clock and
//! a stationary pointer, then prints a JSON run summary.
//!
//! Run with: cargo run --features cli --bin linescape-cli

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use linescape::config::RunConfig;
    use linescape::core::{FrameStats, Params, RecordingSurface, Scene, Viewport};
    use linescape::fps::FpsCounter;
    use linescape::time::now_millis;
    use serde::Serialize;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    #[derive(Serialize)]
    struct RunSummary {
        frames: u64,
        simulated_ms: f64,
        params: Params,
        viewport: Viewport,
        lines: usize,
        live: usize,
        last_frame: FrameStats,
        strokes_last_frame: usize,
        degree: f64,
        wall_fps: f64,
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linescape=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cfg = RunConfig::from_env()?;
    info!(?cfg, "Starting headless run");

    let viewport = Viewport::new(cfg.width, cfg.height)?;
    let params = Params::default();
    let mut scene = match cfg.seed {
        Some(seed) => Scene::with_seed(params, viewport, seed),
        None => Scene::new(params, viewport),
    };

    let mut surface = RecordingSurface::new();
    let mut wall_fps = FpsCounter::new();
    let mut last = FrameStats::default();
    let stats_every = cfg.fps.round().max(1.0) as u64;

    for frame in 0..cfg.frames {
        let now = frame as f64 * cfg.frame_ms();
        surface.clear();
        last = scene.frame(now, &mut surface);
        wall_fps.tick(now_millis());

        if (frame + 1) % stats_every == 0 {
            info!(
                frame = frame + 1,
                lines = last.total,
                painted = last.painted,
                skipped = last.skipped,
                "stats"
            );
        }
    }

    let summary = RunSummary {
        frames: scene.frame_count(),
        simulated_ms: cfg.frames.saturating_sub(1) as f64 * cfg.frame_ms(),
        params,
        viewport: scene.viewport(),
        lines: scene.lines().len(),
        live: scene.live_count(),
        last_frame: last,
        strokes_last_frame: surface.stroke_count(),
        degree: scene.oscillator().degree(),
        wall_fps: wall_fps.fps(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
