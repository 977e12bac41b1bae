// Tiny 5x7 bitmap font for the overlay text.
// Visual: small uppercase glyphs with a 1-pixel black shadow so they stay
// readable on top of bright dots.

use crate::color::Color;
use crate::types::FrameBuffer;

pub const GLYPH_W: i32 = 5;
pub const GLYPH_H: i32 = 7;
pub const ADVANCE: i32 = GLYPH_W + 1;

/// Row bitmaps for a glyph; the low 5 bits are pixels, bit 4 = leftmost.
/// Lowercase letters render as uppercase; unknown chars render as blanks.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],

        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],

        ' ' => [0; 7],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '/' => [0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '|' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000],
        _ => return None,
    };
    Some(rows)
}

#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, px: u32) {
    if x < 0 || y < 0 || x as usize >= fb.width || y as usize >= fb.height {
        return;
    }
    fb.pixels[y as usize * fb.width + x as usize] = px;
}

fn draw_glyph(fb: &mut FrameBuffer, x: i32, y: i32, rows: &[u8; 7], px: u32) {
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..GLYPH_W {
            if bits & (1 << (GLYPH_W - 1 - rx)) != 0 {
                put_pixel(fb, x + rx, y + ry as i32, px);
            }
        }
    }
}

/// Draw `text` with its top-left at (x,y).
pub fn draw_text(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, color: Color) {
    let mut cx = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(fb, cx + 1, y + 1, &rows, 0); // shadow
            draw_glyph(fb, cx, y, &rows, color.to_u32());
        }
        cx += ADVANCE;
    }
}

/// Width in pixels `text` takes when drawn.
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_codes_and_labels_are_covered() {
        for ch in "#0123456789ABCDEF abcdef START END <> / - : . |".chars() {
            assert!(glyph(ch).is_some(), "missing glyph {ch:?}");
        }
        assert!(glyph('~').is_none());
    }

    #[test]
    fn text_lands_inside_its_box() {
        let mut fb = FrameBuffer::new(40, 10);
        draw_text(&mut fb, 1, 1, "HI", Color::WHITE);
        let white = Color::WHITE.to_u32();
        let lit: Vec<usize> = (0..fb.pixels.len()).filter(|&i| fb.pixels[i] == white).collect();
        assert!(!lit.is_empty());
        for i in lit {
            let (x, y) = ((i % 40) as i32, (i / 40) as i32);
            assert!(x >= 1 && x < 1 + text_width("HI") && y >= 1 && y < 1 + GLYPH_H);
        }
    }

    #[test]
    fn text_off_screen_is_clipped() {
        let mut fb = FrameBuffer::new(4, 4);
        draw_text(&mut fb, -3, -3, "#8", Color::WHITE);
        draw_text(&mut fb, 3, 3, "#8", Color::WHITE);
    }
}
