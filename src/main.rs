// What you SEE:
// • The camera image as a mirror made of dots: bright = big dot in the end
//   color, dark = small dot in the start color, on black.
// • A scheme picker strip in the corner: Left/Right choose, Enter applies,
//   P shows it again. ESC quits.
// • If the camera can't be opened the window stays black (see the log).

mod camera;
mod clock;
mod color;
mod config;
mod draw;
mod driver;
mod error;
mod font;
mod halftone;
mod picker;
mod sampler;
mod source;
mod surface;
mod types;

use camera::CameraCapture;
use clap::Parser;
use clock::FrameClock;
use config::Options;
use draw::Drawer;
use driver::{RenderLoop, TickOutcome};
use error::Error;
use log::{debug, error, info, warn};
use picker::SchemePicker;
use std::time::{Duration, Instant};
use surface::{ResizeWatcher, sync_to_viewport};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Options::parse();
    let grid = opts.grid()?;

    /* --- Window + surface ---
       Visual: a black window opens; the surface always matches its size. */
    let mut drawer = Drawer::new("Halftone Mirror", opts.window_width, opts.window_height)?;
    let mut surface = FrameBuffer::new(0, 0);
    let mut screen = FrameBuffer::new(0, 0); // surface + overlay, what gets presented
    let mut resize = ResizeWatcher::default();

    /* --- Camera (requested once) ---
       Visual: on failure nothing ever draws; the window stays black. */
    let mut cam = match CameraCapture::open(opts.camera_request()) {
        Ok(cam) => Some(cam),
        Err(e) => {
            error!("failed to access camera: {e}");
            None
        }
    };

    let mut clock = FrameClock::new(opts.fps);
    let mut render_loop = RenderLoop::new(opts.scheme(), grid);
    let mut picker = SchemePicker::new(opts.scheme());
    info!("starting with color scheme {}", render_loop.scheme());

    /* --- FPS ---
       Visual: shown on the picker strip; logged at debug level. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut fps_text = String::from("FPS 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Resize events: keep the surface glued to the viewport.
        if let Some(viewport) = resize.observe(drawer.viewport()) {
            sync_to_viewport(&mut surface, viewport);
        }

        // 2) Picker keys. Submitting restarts the loop with the new scheme.
        if drawer.p_pressed_once() {
            picker.show();
        }
        if drawer.left_pressed_once() {
            picker.prev();
        }
        if drawer.right_pressed_once() {
            picker.next();
        }
        if drawer.enter_pressed_once() {
            if let Some(scheme) = picker.submit() {
                render_loop.set_scheme(scheme, &mut clock);
            }
        }

        // 3) Buffer the next camera frame; the first good one starts the loop.
        if let Some(cam) = cam.as_mut() {
            if let Err(e) = cam.poll() {
                warn!("{e}");
            }
            render_loop.observe_readiness(cam, &mut clock);
        }

        // 4) Wait for the refresh; run the cycle if a tick is due.
        if let Some(tick) = clock.wait_for_refresh() {
            if let Some(cam) = cam.as_ref() {
                match render_loop.tick(tick, cam, &mut surface, &mut clock) {
                    TickOutcome::Rendered { .. } => frames_this_second += 1,
                    TickOutcome::Skipped => debug!("frame not ready, skipping cycle"),
                    TickOutcome::Stale => {}
                }
            }
        }

        // 5) Compose the overlay on a copy and present it.
        if screen.width != surface.width || screen.height != surface.height {
            screen = surface.clone();
        } else {
            screen.pixels.copy_from_slice(&surface.pixels);
        }
        picker.draw(&mut screen, &fps_text);
        if screen.pixels.is_empty() {
            drawer.pump(); // minimized: just keep window events flowing
        } else {
            drawer.present(&screen)?;
        }

        // 6) FPS once per second.
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {:.1} ({} cycles total)", fps, render_loop.cycles());
            fps_text = format!("FPS {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    // Cancel the pending tick, then let the camera handle stop its stream.
    render_loop.teardown(&mut clock);
    drop(cam);
    Ok(())
}
