//! Color types and conversion utilities
//!
//! Everything here is a pure function of an 8-bit sRGB triple.
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit sRGB as delivered by the dominant-color extractor. Also
//!   carries the YIQ brightness used to rank colors.
//! - [`Hsl`]: hue/saturation decomposition, used by the red-family wash rule.
//! - [`Lab`]: CIE L*a*b* (D65), used for perceptual distance.
//!
//! # Example
//!
//! ```
//! use wash_batch::{Lab, Rgb};
//!
//! let navy = Rgb::new(0, 0, 128);
//! let blue = Rgb::new(0, 0, 255);
//! let de = Lab::from(navy).delta_e(Lab::from(blue));
//! assert!(de > 10.0);
//! ```

mod delta_e;
mod error;
mod hsl;
mod lab;
mod lut;
mod rgb;

pub use delta_e::ciede2000;
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::Rgb;
