pub mod mock_image_source;

pub use mock_image_source::MockImageSource;
