// Frame sampler: current camera frame -> mirrored RGBA buffer at surface size.
// Visual: you see yourself as in a mirror, stretched to fill the window.

use crate::source::VideoSource;
use crate::types::PixelBuffer;
use image::{DynamicImage, imageops};

/// Filter used when stretching the camera frame to the surface.
const SCALE_FILTER: imageops::FilterType = imageops::FilterType::Triangle;

/// Grab the current frame, flip it left-right and stretch it to
/// `width` x `height` (aspect ratio is not kept).
///
/// Returns `None` when there is nothing to sample this cycle: the source is
/// still buffering, no frame has arrived, or the target is empty.
pub fn sample<S: VideoSource + ?Sized>(source: &S, width: u32, height: u32) -> Option<PixelBuffer> {
    if !source.has_enough_data() || width == 0 || height == 0 {
        return None;
    }
    let frame = source.current_frame()?;
    if frame.width() == 0 || frame.height() == 0 {
        return None;
    }

    let mirrored = imageops::flip_horizontal(frame);
    let scaled = if mirrored.dimensions() == (width, height) {
        mirrored
    } else {
        imageops::resize(&mirrored, width, height, SCALE_FILTER)
    };
    Some(DynamicImage::ImageRgb8(scaled).into_rgba8())
}
