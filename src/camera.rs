// Opens the camera and keeps the latest decoded frame around for the sampler.
// Visual expectation: once `has_enough_data()` flips to true, the halftone
// dots start following what the camera sees.

use crate::error::Error;
use crate::source::VideoSource;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::RgbImage;
use log::{info, warn};

/// What to ask the camera for. The driver may hand back something close.
#[derive(Clone, Copy, Debug)]
pub struct CameraRequest {
    pub index: u32,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Decoded frames to buffer before reporting readiness.
    pub warmup_frames: u32,
}

/// Owns the open stream; the stream is stopped when this is dropped,
/// whichever way the program leaves.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    latest: Option<RgbImage>,
    frames_buffered: u32,
    warmup_frames: u32,
}

impl CameraCapture {
    /// Open the camera at (roughly) the requested mode and start streaming.
    /// Nothing is drawn yet; the stream is simply running.
    pub fn open(req: CameraRequest) -> Result<Self, Error> {
        let fmt = CameraFormat::new(
            Resolution::new(req.width, req.height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            req.fps,
        );
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let cam = Camera::new(CameraIndex::Index(req.index), requested)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        // Wrap first so a failing `open_stream` still goes through Drop.
        let mut capture = Self {
            cam,
            width: 0,
            height: 0,
            latest: None,
            frames_buffered: 0,
            warmup_frames: req.warmup_frames,
        };
        capture
            .cam
            .open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The stream may settle on a different resolution than we asked for.
        let actual = capture.cam.resolution();
        capture.width = actual.width();
        capture.height = actual.height();
        info!(
            "camera {} streaming at {}x{} ({} fps requested)",
            req.index, capture.width, capture.height, req.fps
        );
        Ok(capture)
    }

    /// Pull the next frame from the stream (blocks until one arrives) and
    /// make it the current frame.
    pub fn poll(&mut self) -> Result<(), Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // Rebuild from the raw bytes so we don't depend on nokhwa's image version.
        let (w, h) = decoded.dimensions();
        let rgb = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| Error::CameraFrame(format!("Decode RGB: short buffer for {w}x{h}")))?;

        if (w, h) != (self.width, self.height) {
            info!("camera frames are now {w}x{h}");
            self.width = w;
            self.height = h;
        }

        self.latest = Some(rgb);
        self.frames_buffered = self.frames_buffered.saturating_add(1);
        Ok(())
    }
}

impl VideoSource for CameraCapture {
    fn intrinsic_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn has_enough_data(&self) -> bool {
        self.latest.is_some() && self.frames_buffered >= self.warmup_frames.max(1)
    }

    fn current_frame(&self) -> Option<&RgbImage> {
        self.latest.as_ref()
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        if !self.cam.is_stream_open() {
            return;
        }
        match self.cam.stop_stream() {
            Ok(()) => info!("camera stream stopped"),
            Err(e) => warn!("failed to stop camera stream: {e}"),
        }
    }
}
