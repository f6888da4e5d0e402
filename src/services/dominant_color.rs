//! Dominant color extraction.
//!
//! The extractor works on a normalized RGBA buffer and may find nothing: a
//! fully transparent or pure white image has no usable pixels. Callers fall
//! back to [`fallback_pixel`] in that case.

use image::RgbaImage;
use wash_batch::Rgb;

/// Pixels with lower alpha are ignored
const MIN_ALPHA: u8 = 125;

/// Pixels with all channels above this are treated as background white
const WHITE_CUTOFF: u8 = 250;

/// Bits kept per channel when bucketing
const SIGBITS: u32 = 5;
const BUCKETS: usize = 1 << (3 * SIGBITS);

/// Strategy for reducing a pixel buffer to a single representative color.
pub trait DominantColorExtractor: Send + Sync {
    /// The dominant color, or `None` when no pixel qualifies.
    fn extract(&self, pixels: &RgbaImage) -> Option<Rgb>;
}

/// Most-populated-bucket extractor.
///
/// Samples every `quality`-th pixel, skips translucent and near-white
/// pixels, buckets the rest at 5 bits per channel and returns the mean
/// color of the fullest bucket. Ties go to the lowest bucket index so the
/// result is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HistogramExtractor {
    quality: usize,
}

impl Default for HistogramExtractor {
    fn default() -> Self {
        Self { quality: 10 }
    }
}

impl HistogramExtractor {
    /// Sampling stride; 1 visits every pixel. Zero is treated as 1.
    pub fn new(quality: usize) -> Self {
        Self {
            quality: quality.max(1),
        }
    }

    pub fn quality(&self) -> usize {
        self.quality
    }
}

#[derive(Clone, Copy, Default)]
struct Bucket {
    count: u32,
    sum: [u64; 3],
}

fn bucket_index(r: u8, g: u8, b: u8) -> usize {
    let shift = 8 - SIGBITS;
    ((r as usize >> shift) << (2 * SIGBITS))
        | ((g as usize >> shift) << SIGBITS)
        | (b as usize >> shift)
}

impl DominantColorExtractor for HistogramExtractor {
    fn extract(&self, pixels: &RgbaImage) -> Option<Rgb> {
        let mut buckets = vec![Bucket::default(); BUCKETS];

        for px in pixels.pixels().step_by(self.quality) {
            let [r, g, b, a] = px.0;
            if a < MIN_ALPHA {
                continue;
            }
            if r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF {
                continue;
            }
            let bucket = &mut buckets[bucket_index(r, g, b)];
            bucket.count += 1;
            bucket.sum[0] += r as u64;
            bucket.sum[1] += g as u64;
            bucket.sum[2] += b as u64;
        }

        // First maximum wins
        let best = buckets
            .iter()
            .filter(|b| b.count > 0)
            .fold(None::<&Bucket>, |best, b| match best {
                Some(current) if current.count >= b.count => Some(current),
                _ => Some(b),
            })?;

        let count = best.count as u64;
        let mean = |sum: u64| ((sum + count / 2) / count) as u8;
        Some(Rgb::new(mean(best.sum[0]), mean(best.sum[1]), mean(best.sum[2])))
    }
}

/// Top-left pixel of the buffer, alpha ignored.
pub fn fallback_pixel(pixels: &RgbaImage) -> Option<Rgb> {
    let [r, g, b, _] = pixels.pixels().next()?.0;
    Some(Rgb::new(r, g, b))
}
