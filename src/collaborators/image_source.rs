use crate::models::ImageData;

/// "Pick one image" capability provided by the host.
///
/// Called only in response to an explicit user request. `None` means the
/// user cancelled the picker.
pub trait ImageSource {
    fn pick_image(&mut self) -> Option<ImageData>;
}

/// Image source for hosts without a picker; every request is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageSource;

impl ImageSource for NoImageSource {
    fn pick_image(&mut self) -> Option<ImageData> {
        None
    }
}
