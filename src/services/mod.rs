pub mod color_service;
pub mod dominant_color;
pub mod image_decoder;

pub use color_service::{ColorService, ServiceError, SortOutcome, Upload};
pub use dominant_color::{fallback_pixel, DominantColorExtractor, HistogramExtractor};
pub use image_decoder::{decode_image, DecodeError, DecodedImage};
