mod audio;

use std::time::Instant;

use clap::Parser;
use crescent_core::{
    palette_for_phase, AnimationState, AppConfig, AssetStore, AudioBackend, Command,
    CrescentError, FrameExporter, FrameRenderer, FrameScheduler, Framebuffer, InputQueue,
    MusicController, SilentBackend, CONTROL_STOPS,
};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> crescent_core::Result<()> {
    init_tracing();

    let _cli = Cli::parse();
    let config = AppConfig::default();
    run(&config)
}

fn run(config: &AppConfig) -> crescent_core::Result<()> {
    let assets = AssetStore::discover(&config.assets);
    if assets.font().is_none() {
        tracing::warn!("caption font not found, falling back to the resident typeface");
    }
    let mut music = MusicController::new(music_backend(&assets));

    let width = config.canvas.width;
    let height = config.canvas.height;
    let mut window = Window::new(
        "Crescent Moon",
        width as usize,
        height as usize,
        WindowOptions::default(),
    )
    .map_err(|err| CrescentError::msg(format!("failed to create window: {err}")))?;
    // The window pumps fast so key presses land promptly; the animation
    // itself only ticks when the scheduler says so.
    window.set_target_fps(60);

    let renderer = FrameRenderer::new(config);
    let exporter = FrameExporter::new(".");
    let mut scheduler = FrameScheduler::with_fps(config.animation.frame_rate);
    let mut queue = InputQueue::new();
    let mut state = AnimationState::new(config.animation.total_phases);
    let mut frame = Framebuffer::new(width, height);
    let mut rng = SmallRng::from_entropy();
    let mut last_pump = Instant::now();

    tracing::info!(
        total_phases = state.total_phases(),
        frame_rate = config.animation.frame_rate,
        "starting animation loop"
    );

    while window.is_open() && !window.is_key_down(Key::Escape) {
        for key in window.get_keys_pressed(KeyRepeat::No) {
            match key {
                Key::S => queue.push_key('s'),
                Key::M => queue.push_key('m'),
                _ => {}
            }
        }

        let now = Instant::now();
        if scheduler.on_elapsed(now - last_pump) {
            // Commands run against the frame currently on screen, before
            // the cycle moves on.
            for command in queue.drain() {
                match command {
                    Command::SaveFrame => save_frame(&exporter, &frame, &state),
                    Command::ToggleMusic => music.request_toggle(),
                }
            }

            state = state.advance();
            let palette =
                palette_for_phase(state.phase_index(), state.total_phases(), &CONTROL_STOPS);
            renderer.render(&mut frame, &state, &palette, &mut rng);
        }
        last_pump = now;

        music.poll();
        window
            .update_with_buffer(frame.pixels(), width as usize, height as usize)
            .map_err(|err| CrescentError::msg(format!("failed to present frame: {err}")))?;
    }

    Ok(())
}

fn music_backend(assets: &AssetStore) -> Box<dyn AudioBackend> {
    match assets.music() {
        Some(path) => match audio::CpalMusic::load(path) {
            Ok(backend) => {
                tracing::info!(path = %path.display(), "music track loaded");
                Box::new(backend)
            }
            Err(err) => {
                tracing::warn!(%err, "music disabled");
                Box::new(SilentBackend)
            }
        },
        None => {
            tracing::warn!("music track not found, toggle disabled");
            Box::new(SilentBackend)
        }
    }
}

fn save_frame(exporter: &FrameExporter, frame: &Framebuffer, state: &AnimationState) {
    match exporter.save(frame, state.phase_index(), state.total_phases()) {
        Ok(path) => tracing::info!(path = %path.display(), "frame exported"),
        Err(err) => tracing::warn!(%err, "frame export failed"),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// The piece takes no options; the parser exists for `--help`/`--version`
/// and to reject stray arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generative moon-phase animation", long_about = None)]
struct Cli {}
