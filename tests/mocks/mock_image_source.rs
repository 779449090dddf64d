use contact_book::{ImageData, ImageSource};
use std::collections::VecDeque;

/// Mock image picker for testing.
///
/// Replays a scripted sequence of picks (`None` = cancelled) and counts how
/// often it was opened.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockImageSource {
    picks: VecDeque<Option<ImageData>>,
    calls: usize,
}

#[allow(dead_code)]
impl MockImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful pick of `bytes`.
    pub fn then_pick(mut self, bytes: &[u8]) -> Self {
        self.picks.push_back(Some(ImageData::new(bytes.to_vec())));
        self
    }

    /// Queue a cancelled pick.
    pub fn then_cancel(mut self) -> Self {
        self.picks.push_back(None);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls
    }
}

impl ImageSource for MockImageSource {
    fn pick_image(&mut self) -> Option<ImageData> {
        self.calls += 1;
        self.picks.pop_front().flatten()
    }
}
