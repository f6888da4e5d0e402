//! 8-bit sRGB color type
//!
//! Dominant colors arrive as one byte per channel. Keeping the channels as
//! `u8` makes out-of-range input unrepresentable, so every conversion in
//! this crate is total.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// YIQ luma weights (0.299, 0.587, 0.114) in thousandths.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// A gamma-encoded sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use wash_batch::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use wash_batch::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// YIQ brightness on its native 0.0..=255.0 scale.
    ///
    /// Summed in integers, so greys land exactly on their channel value:
    /// `(10,10,10)` is 10.0, not 10.000000000000002.
    #[inline]
    pub fn brightness(self) -> f64 {
        let sum = LUMA_R * self.r as u32 + LUMA_G * self.g as u32 + LUMA_B * self.b as u32;
        sum as f64 / 1000.0
    }

    /// Perceptual lightness on a 0.0..=100.0 scale (100 = white).
    ///
    /// This is [`brightness`](Self::brightness) rescaled, not the arithmetic
    /// mean of the channels: green contributes roughly five times as much as
    /// blue.
    ///
    /// ```
    /// use wash_batch::Rgb;
    /// assert!((Rgb::new(255, 255, 255).lightness() - 100.0).abs() < 1e-9);
    /// assert!(Rgb::new(0, 255, 0).lightness() > Rgb::new(0, 0, 255).lightness());
    /// ```
    #[inline]
    pub fn lightness(self) -> f64 {
        (self.brightness() * 100.0 / 255.0).clamp(0.0, 100.0)
    }

    /// True when all three channels are equal (white, black, greys).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from text.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `R,G,B` - decimal channels, each 0..=255
    ///
    /// Hex parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use wash_batch::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let red: Rgb = "255, 0, 0".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// assert!("256,0,0".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let channels = s
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<Vec<_>, _>>()?;
            return match channels.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b)),
                _ => Err(ParseColorError::ChannelCount(channels.len())),
            };
        }

        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix alone would let a leading '+' through ("#+f+f+f")
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHexDigit(bad));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
