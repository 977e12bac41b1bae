// Command-line options.

use crate::camera::CameraRequest;
use crate::color::{Color, ColorScheme};
use crate::error::Error;
use crate::types::GridParams;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Live camera halftone mirror")]
pub struct Options {
    /// Camera index (0 = default webcam)
    #[arg(long, default_value_t = 0)]
    pub camera: u32,

    /// Camera mode to request, WIDTHxHEIGHT (the closest supported one is used)
    #[arg(short, long, default_value = "640x480", value_parser = parse_resolution)]
    pub resolution: (u32, u32),

    /// Refresh rate of the render loop
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Distance in pixels between dots
    #[arg(long, default_value_t = GridParams::DEFAULT_SPACING)]
    pub spacing: usize,

    /// Diameter of a dot on a fully bright pixel
    #[arg(long, default_value_t = GridParams::DEFAULT_DIAMETER)]
    pub diameter: f32,

    /// Dot color for dark areas, #RRGGBB
    #[arg(long, default_value = "#000000", value_parser = Color::parse)]
    pub start_color: Color,

    /// Dot color for bright areas, #RRGGBB
    #[arg(long, default_value = "#FFFFFF", value_parser = Color::parse)]
    pub end_color: Color,

    /// Frames to buffer before the halftone loop starts
    #[arg(long, default_value_t = 1)]
    pub warmup_frames: u32,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub window_width: usize,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub window_height: usize,
}

impl Options {
    pub fn grid(&self) -> Result<GridParams, Error> {
        GridParams::new(self.spacing, self.diameter)
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::new(self.start_color, self.end_color)
    }

    pub fn camera_request(&self) -> CameraRequest {
        CameraRequest {
            index: self.camera,
            width: self.resolution.0,
            height: self.resolution.1,
            fps: self.fps,
            warmup_frames: self.warmup_frames,
        }
    }
}

/// Parse `1280x720`.
pub fn parse_resolution(arg: &str) -> Result<(u32, u32), String> {
    let (w, h) = arg
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{arg}'"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("Unable to parse width '{w}': {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("Unable to parse height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("resolution must be non-zero, got '{arg}'"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_look() {
        let opts = Options::try_parse_from(["halftone-mirror"]).unwrap();
        assert_eq!(opts.scheme(), ColorScheme::default());
        assert_eq!(opts.grid().unwrap(), GridParams::default());
        assert_eq!(opts.resolution, (640, 480));
        let req = opts.camera_request();
        assert_eq!((req.index, req.width, req.height, req.fps), (0, 640, 480, 60));
    }

    #[test]
    fn colors_and_grid_from_flags() {
        let opts = Options::try_parse_from([
            "halftone-mirror",
            "--start-color",
            "#102030",
            "--end-color",
            "ffcc00",
            "--spacing",
            "16",
            "--diameter",
            "14",
            "-r",
            "1280x720",
        ])
        .unwrap();
        assert_eq!(opts.scheme(), ColorScheme::new(Color::new(0x10, 0x20, 0x30), Color::new(0xFF, 0xCC, 0)));
        assert_eq!(opts.grid().unwrap().spacing, 16);
        assert_eq!(opts.resolution, (1280, 720));
    }

    #[test]
    fn malformed_color_is_rejected() {
        let res = Options::try_parse_from(["halftone-mirror", "--end-color", "#ggg000"]);
        assert!(res.is_err());
    }

    #[test]
    fn zero_spacing_fails_validation() {
        let opts = Options::try_parse_from(["halftone-mirror", "--spacing", "0"]).unwrap();
        assert!(matches!(opts.grid(), Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn resolution_parsing() {
        assert_eq!(parse_resolution("800x600"), Ok((800, 600)));
        assert_eq!(parse_resolution("800X600"), Ok((800, 600)));
        assert!(parse_resolution("800").is_err());
        assert!(parse_resolution("0x600").is_err());
        assert!(parse_resolution("axb").is_err());
    }
}
