//! Image processing and input handling.

mod input;
mod single;

pub use input::{file_name_of, find_images, panel_path, SUPPORTED_EXTENSIONS};
pub use single::{process_single_image, ProcessedImage};
