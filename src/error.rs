// One error type for the whole program.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the surface to the window failed

    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed

    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColorFormat(String), // A color string is not 6 hex digits

    #[error("Invalid grid: {0}")]
    InvalidGrid(String), // Spacing/diameter make no sense
}
