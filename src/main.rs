// What you SEE:
// • A blank canvas under a thin status strip.
// • Hold Left Mouse to paint; E toggles the eraser (paints the background color).
// • R / C / T arm a rectangle / circle / triangle for the next click.
// • [ ] brush width, - = shape size, 1-8 brush color, B next background color.
// • Z (or U) undoes, X clears. ESC quits.

use sketchpad::commands;
use sketchpad::config::AppConfig;
use sketchpad::draw::{self, Drawer, HUD_HEIGHT};
use sketchpad::error::Error;
use sketchpad::input::{self, PointerTracker};
use sketchpad::session::Session;
use sketchpad::types::{FrameBuffer, Rgba};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    /* --- Config (best-effort: no file means defaults) --- */
    let path = AppConfig::default_path();
    let cfg = AppConfig::load(&path)?;
    info!(path = %path.display(), ?cfg, "config loaded");
    info!(palette = %draw::palette_legend(), "number keys");

    /* --- Session + window ---
       Visual: window opens with a canvas filled with the background color. */
    let mut session = Session::new(cfg.width, cfg.height, cfg.tools(), cfg.history_limit)?;
    let mut drawer = Drawer::new("Sketchpad", cfg.width, cfg.height + HUD_HEIGHT)?;

    /* --- Reusable screen buffer (strip + canvas) --- */
    let mut screen = FrameBuffer::filled(cfg.width, cfg.height + HUD_HEIGHT, Rgba::BLACK);
    let mut pointer = PointerTracker::new();

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Toolbar keys first, so a shape armed this frame applies to this frame's click. */
        for cmd in drawer.commands() {
            commands::apply(&mut session, cmd);
        }

        /* 2) Mouse → pointer events → paint. */
        let mouse = drawer.mouse_pos();
        let on_canvas = mouse.and_then(draw::to_canvas);
        for event in pointer.update(on_canvas, drawer.left_mouse_down()) {
            input::route(&mut session, event);
        }

        /* 3) Compose and present. */
        draw::compose(&mut screen, &session, mouse);
        drawer.present(&screen)?;

        /* 4) FPS counter (debug log once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = frames_this_second as f32 / secs, snapshots = session.history().len(), "frame stats");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("bye");
    Ok(())
}
