// Window + software drawing.
// Visual effects provided here:
// 1) A resizable window that shows the halftone surface.
// 2) Anti-aliased filled circles (the halftone dots) and solid rectangles.

use crate::color::Color;
use crate::error::Error;
use crate::types::{FrameBuffer, ViewportSize};
use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};

/// Anything the halftone renderer can paint on.
pub trait Canvas {
    /// (width, height) in pixels.
    fn size(&self) -> (usize, usize);

    /// Fill the whole canvas with one color.
    fn clear(&mut self, color: Color);

    /// Filled circle centered on (cx, cy). A radius of 0 draws nothing.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new black window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft, // 1 surface pixel = 1 window pixel
            ..WindowOptions::default()
        };
        let window = Window::new(title, width, height, opts).map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen (also pumps window events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Pump window events without drawing (used while the surface is empty).
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Current client-area size; polled every loop to notice resizes.
    pub fn viewport(&self) -> ViewportSize {
        let (w, h) = self.window.get_size();
        ViewportSize::new(w, h)
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    // Scheme picker keys
    pub fn left_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Left, KeyRepeat::Yes)
    }

    pub fn right_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Right, KeyRepeat::Yes)
    }

    pub fn enter_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Enter, KeyRepeat::No)
    }

    pub fn p_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::P, KeyRepeat::No)
    }
}

/* ---------- Software drawing on the FrameBuffer ---------- */

/// Mix `color` over the pixel at (x,y) with coverage `a` in [0,1].
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: usize, y: usize, color: Color, a: f32) {
    let idx = y * fb.width + x;
    if a >= 1.0 {
        fb.pixels[idx] = color.to_u32();
        return;
    }
    let old = Color::from_u32(fb.pixels[idx]);
    let mix = |o: u8, n: u8| (o as f32 + (n as f32 - o as f32) * a).round() as u8;
    fb.pixels[idx] = Color::new(mix(old.r, color.r), mix(old.g, color.g), mix(old.b, color.b)).to_u32();
}

/// Solid axis-aligned rectangle, clipped to the buffer.
/// Visual: used for the scheme swatches and the overlay backdrop.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let x0 = (x.max(0) as usize).min(fb.width);
    let y0 = (y.max(0) as usize).min(fb.height);
    let x1 = ((x + w).max(0) as usize).min(fb.width);
    let y1 = ((y + h).max(0) as usize).min(fb.height);
    let px = color.to_u32();
    for row in y0..y1 {
        let start = row * fb.width;
        for p in &mut fb.pixels[start + x0..start + x1.max(x0)] {
            *p = px;
        }
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_u32());
    }

    /// Coverage is estimated from the distance of each pixel center to the
    /// circle edge, which gives a one-pixel soft rim.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if !(radius > 0.0) || self.width == 0 || self.height == 0 {
            return;
        }
        let x0 = (cx - radius - 1.0).floor().max(0.0) as usize;
        let y0 = (cy - radius - 1.0).floor().max(0.0) as usize;
        let x1 = ((cx + radius + 1.0).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((cy + radius + 1.0).ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    blend_pixel(self, x, y, color, coverage);
                }
            }
        }
    }
}
