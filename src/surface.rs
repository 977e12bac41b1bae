// Keeps the output surface the same size as the window's client area.
// Visual: after you drag the window edge, the dot grid covers the new area.

use crate::types::{FrameBuffer, ViewportSize};
use log::info;

/// Turns polled viewport sizes into resize events.
#[derive(Default)]
pub struct ResizeWatcher {
    last: Option<ViewportSize>,
}

impl ResizeWatcher {
    /// Returns the new size the first time, and whenever it changed since
    /// the previous call.
    pub fn observe(&mut self, now: ViewportSize) -> Option<ViewportSize> {
        if self.last == Some(now) {
            return None;
        }
        self.last = Some(now);
        Some(now)
    }
}

/// Match `surface` to `viewport`. A resized surface starts out black.
/// Returns true when the size actually changed.
pub fn sync_to_viewport(surface: &mut FrameBuffer, viewport: ViewportSize) -> bool {
    if surface.width == viewport.width && surface.height == viewport.height {
        return false;
    }
    info!(
        "surface {}x{} -> {}x{}",
        surface.width, surface.height, viewport.width, viewport.height
    );
    surface.width = viewport.width;
    surface.height = viewport.height;
    surface.pixels.clear();
    surface.pixels.resize(viewport.width * viewport.height, 0);
    true
}
