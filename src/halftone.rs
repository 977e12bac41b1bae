// Halftone renderer: one dot per grid cell, size and tint from brightness.
// Visual: the mirrored camera image turns into a field of dots on black;
// bright areas get big dots in the end color, dark areas tiny start-colored ones.

use crate::color::{Color, ColorScheme};
use crate::draw::Canvas;
use crate::types::{GridParams, PixelBuffer};

/// Repaint `canvas` from `buffer`. Returns how many grid points were visited.
///
/// Grid points start at (0,0) and step by `grid.spacing` while inside the
/// buffer; partial cells at the right/bottom edge are not visited.
pub fn render<C: Canvas + ?Sized>(
    buffer: &PixelBuffer,
    canvas: &mut C,
    scheme: &ColorScheme,
    grid: &GridParams,
) -> usize {
    canvas.clear(Color::BLACK);

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let data = buffer.as_raw();
    let max_radius = grid.max_radius();
    let mut visited = 0;

    for y in (0..height).step_by(grid.spacing) {
        for x in (0..width).step_by(grid.spacing) {
            let i = (y * width + x) * 4;
            let brightness = (data[i] as f32 + data[i + 1] as f32 + data[i + 2] as f32) / 3.0;
            let fraction = brightness / 255.0;

            let radius = fraction * max_radius;
            let color = scheme.at(fraction as f64);
            canvas.fill_circle(x as f32, y as f32, radius, color);
            visited += 1;
        }
    }
    visited
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) enum Op {
        Clear(Color),
        Circle { x: f32, y: f32, r: f32, color: Color },
    }

    /// Canvas that only records what was asked of it.
    pub(crate) struct RecordingCanvas {
        pub width: usize,
        pub height: usize,
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub(crate) fn new(width: usize, height: usize) -> Self {
            Self { width, height, ops: Vec::new() }
        }

        pub(crate) fn circles(&self) -> impl Iterator<Item = (f32, f32, f32, Color)> + '_ {
            self.ops.iter().filter_map(|op| match *op {
                Op::Circle { x, y, r, color } => Some((x, y, r, color)),
                Op::Clear(_) => None,
            })
        }
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (usize, usize) {
            (self.width, self.height)
        }
        fn clear(&mut self, color: Color) {
            self.ops.push(Op::Clear(color));
        }
        fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
            self.ops.push(Op::Circle { x, y, r, color });
        }
    }

    fn solid(width: u32, height: u32, v: u8) -> PixelBuffer {
        RgbaImage::from_pixel(width, height, Rgba([v, v, v, 255]))
    }

    const SUNSET: ColorScheme = ColorScheme::new(Color::new(40, 0, 90), Color::new(255, 170, 20));

    #[test]
    fn black_frame_gives_only_empty_dots() {
        for scheme in [ColorScheme::default(), SUNSET] {
            let mut canvas = RecordingCanvas::new(48, 36);
            render(&solid(48, 36, 0), &mut canvas, &scheme, &GridParams::default());

            assert_eq!(canvas.ops[0], Op::Clear(Color::BLACK));
            assert!(canvas.circles().all(|(_, _, r, _)| r == 0.0));
        }
    }

    #[test]
    fn black_frame_leaves_a_black_surface() {
        let mut fb = crate::types::FrameBuffer::new(48, 36);
        fb.pixels.fill(0x00FF_FFFF);
        render(&solid(48, 36, 0), &mut fb, &SUNSET, &GridParams::default());
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn white_frame_gives_full_dots_in_end_color() {
        let grid = GridParams::default();
        let mut canvas = RecordingCanvas::new(60, 24);
        let n = render(&solid(60, 24, 255), &mut canvas, &SUNSET, &grid);

        assert_eq!(n, 10);
        assert_eq!(canvas.circles().count(), 10);
        for (_, _, r, color) in canvas.circles() {
            assert_eq!(r, grid.max_diameter / 2.0);
            assert_eq!(color, SUNSET.end);
        }
    }

    #[test]
    fn grid_point_count_matches_dimensions() {
        let mut canvas = RecordingCanvas::new(1200, 720);
        let n = render(&solid(1200, 720, 128), &mut canvas, &ColorScheme::default(), &GridParams::default());
        assert_eq!(n, 100 * 60);
        assert_eq!(canvas.circles().count(), 6000);
    }

    #[test]
    fn partial_edge_cells_still_get_their_origin_point() {
        // 0, 12, 24 fit inside 25 columns; 0, 12 inside 13 rows.
        let mut canvas = RecordingCanvas::new(25, 13);
        let n = render(&solid(25, 13, 10), &mut canvas, &ColorScheme::default(), &GridParams::default());
        assert_eq!(n, 3 * 2);
        let xs: Vec<f32> = canvas.circles().take(3).map(|(x, _, _, _)| x).collect();
        assert_eq!(xs, vec![0.0, 12.0, 24.0]);
    }

    #[test]
    fn brightness_ignores_alpha_and_averages_rgb() {
        let mut buf = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        buf.put_pixel(0, 0, Rgba([30, 60, 90, 7]));
        let mut canvas = RecordingCanvas::new(1, 1);
        render(&buf, &mut canvas, &ColorScheme::default(), &GridParams::default());

        let (x, y, r, color) = canvas.circles().next().unwrap();
        assert_eq!((x, y), (0.0, 0.0));
        // brightness 60 -> 60/255 of the max radius, gray round(60.0)
        assert!((r - 60.0 / 255.0 * 5.0).abs() < 1e-5);
        assert_eq!(color, Color::new(60, 60, 60));
    }

    #[test]
    fn same_input_gives_same_output() {
        let mut buf = solid(36, 36, 0);
        for (i, p) in buf.pixels_mut().enumerate() {
            p.0 = [(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255];
        }
        let mut a = RecordingCanvas::new(36, 36);
        let mut b = RecordingCanvas::new(36, 36);
        render(&buf, &mut a, &SUNSET, &GridParams::default());
        render(&buf, &mut b, &SUNSET, &GridParams::default());
        assert_eq!(a.ops, b.ops);
    }
}
