// On-screen color scheme picker.
// Visual: a dark strip in the top-left corner with two swatches and their hex
// codes. Left/Right flip through candidates, Enter applies and hides the
// strip, P brings it back.

use crate::color::{Color, ColorScheme};
use crate::draw::fill_rect;
use crate::font::{GLYPH_H, draw_text, text_width};
use crate::types::FrameBuffer;

/// Built-in candidates offered after the startup scheme.
pub const PRESETS: [ColorScheme; 5] = [
    ColorScheme::new(Color::BLACK, Color::WHITE),
    ColorScheme::new(Color::new(0x1A, 0x00, 0x33), Color::new(0xFF, 0xB3, 0x00)), // ember
    ColorScheme::new(Color::new(0x00, 0x20, 0x40), Color::new(0x00, 0xFF, 0xE0)), // sonar
    ColorScheme::new(Color::new(0xFF, 0x00, 0x80), Color::new(0x00, 0xC0, 0xFF)), // neon
    ColorScheme::new(Color::new(0x10, 0x30, 0x10), Color::new(0xB0, 0xFF, 0x60)), // phosphor
];

const PAD: i32 = 6;
const SWATCH: i32 = 14;
const BACKDROP: Color = Color::new(0x18, 0x18, 0x18);
const TEXT: Color = Color::WHITE;
const HINT: Color = Color::new(0xA0, 0xA0, 0xA0);

pub struct SchemePicker {
    candidates: Vec<ColorScheme>,
    selected: usize,
    visible: bool,
}

impl SchemePicker {
    /// `initial` is offered first; presets equal to it are not repeated.
    /// The picker starts out visible.
    pub fn new(initial: ColorScheme) -> Self {
        let mut candidates = vec![initial];
        candidates.extend(PRESETS.iter().copied().filter(|p| *p != initial));
        Self { candidates, selected: 0, visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn candidate(&self) -> ColorScheme {
        self.candidates[self.selected]
    }

    pub fn next(&mut self) {
        if self.visible {
            self.selected = (self.selected + 1) % self.candidates.len();
        }
    }

    pub fn prev(&mut self) {
        if self.visible {
            self.selected = (self.selected + self.candidates.len() - 1) % self.candidates.len();
        }
    }

    /// Apply the candidate: hides the picker and returns the scheme to use.
    /// Nothing happens while hidden.
    pub fn submit(&mut self) -> Option<ColorScheme> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(self.candidate())
    }

    /// Draw the strip (no-op while hidden). `status` goes on the second line.
    pub fn draw(&self, fb: &mut FrameBuffer, status: &str) {
        if !self.visible {
            return;
        }
        let scheme = self.candidate();
        let line1 = format!(
            "SCHEME {}/{}  START {}  END {}",
            self.selected + 1,
            self.candidates.len(),
            scheme.start,
            scheme.end
        );
        let line2 = format!("< > PICK  ENTER APPLY  | {status}");

        let text_x = PAD + 2 * (SWATCH + PAD);
        let width = text_x + text_width(&line1).max(text_width(&line2)) + PAD;
        let height = PAD + SWATCH.max(2 * GLYPH_H + 4) + PAD;
        fill_rect(fb, 0, 0, width, height, BACKDROP);

        fill_rect(fb, PAD, PAD, SWATCH, SWATCH, scheme.start);
        fill_rect(fb, PAD + SWATCH + PAD, PAD, SWATCH, SWATCH, scheme.end);
        draw_text(fb, text_x, PAD, &line1, TEXT);
        draw_text(fb, text_x, PAD + GLYPH_H + 4, &line2, HINT);
    }
}
