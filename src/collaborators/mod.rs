//! Host-supplied capabilities the contact book depends on.
//!
//! The core never reads the system clock or opens an image picker on its
//! own; both are injected through the traits defined here.

mod clock;
mod image_source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use image_source::{ImageSource, NoImageSource};
