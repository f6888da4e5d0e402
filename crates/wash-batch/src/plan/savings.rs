//! Wash savings

/// Washes avoided by batching: one wash per color minus one wash per batch.
///
/// Saturates at zero. A valid partition never has more batches than colors.
///
/// ```
/// use wash_batch::washes_saved;
///
/// assert_eq!(washes_saved(5, 2), 3);
/// assert_eq!(washes_saved(0, 0), 0);
/// ```
#[inline]
pub fn washes_saved(descriptor_count: usize, batch_count: usize) -> usize {
    descriptor_count.saturating_sub(batch_count)
}
