//! GUS Core Library
//!
//! Quantification of GUS-blue staining within plant-root regions of
//! photographs, shared by the batch command line and the web front-end.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod filters;
pub mod mask;
pub mod models;
pub mod morphology;
pub mod pipeline;

// Re-export commonly used types
pub use color::Hsv;
pub use decoders::{decode_image, decode_image_from_bytes, DecodedImage, ImageFormat};
pub use mask::BinaryMask;
pub use models::{HsvRange, QuantifyParams, RootParams, StainMetrics};
pub use pipeline::{quantify, QuantifyResult};
