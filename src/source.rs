// What the pipeline needs from a live video feed.

use image::RgbImage;

/// A live frame provider (the camera in the app, fakes in tests).
pub trait VideoSource {
    /// Size of the frames the source delivers.
    fn intrinsic_size(&self) -> (u32, u32);

    /// True once enough frames are buffered to sample one without stalling.
    fn has_enough_data(&self) -> bool;

    /// The most recent frame, if any has arrived.
    fn current_frame(&self) -> Option<&RgbImage>;
}
