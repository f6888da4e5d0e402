use std::path::{Path, PathBuf};
use std::sync::Arc;

use wash_batch::{ColorDescriptor, PlanError, SkipReason, SkippedImage, WashPlan, WashPlanner};

use super::dominant_color::{fallback_pixel, DominantColorExtractor, HistogramExtractor};
use super::image_decoder::decode_image;

/// One uploaded file, as received from multipart or read from disk.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Original file name
    pub file_name: String,
    /// Declared MIME type; `None` when unknown (CLI input)
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Wash plan plus the per-image data the planner does not carry.
pub struct SortOutcome {
    pub plan: WashPlan,
    /// Thumbnail data URL per input index; `None` for skipped inputs
    pub thumbnails: Vec<Option<String>>,
}

impl SortOutcome {
    /// Thumbnail for the image a descriptor came from.
    pub fn thumbnail_for(&self, descriptor: &ColorDescriptor) -> Option<&str> {
        self.thumbnails
            .get(descriptor.input_index())
            .and_then(|t| t.as_deref())
    }
}

/// Error from the color service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("No images uploaded.")]
    NoImages,

    #[error("No valid colors extracted from images.")]
    NoUsableInput { skipped: Vec<SkippedImage> },
}

impl From<PlanError> for ServiceError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::NoUsableInput { skipped } => ServiceError::NoUsableInput { skipped },
        }
    }
}

/// Result of the per-image worker
struct Analyzed {
    descriptor: ColorDescriptor,
    thumbnail_url: String,
}

/// Turns uploaded images into a wash plan.
///
/// Decoding, extraction and descriptor construction run on the blocking
/// pool, one task per image. Sequencing and partitioning run afterwards on
/// the calling task.
pub struct ColorService {
    planner: Arc<WashPlanner>,
    extractor: Arc<dyn DominantColorExtractor>,
    thumbnail_size: u32,
}

impl ColorService {
    pub fn new(planner: Arc<WashPlanner>, thumbnail_size: u32) -> Self {
        Self::with_extractor(planner, Arc::new(HistogramExtractor::default()), thumbnail_size)
    }

    pub fn with_extractor(
        planner: Arc<WashPlanner>,
        extractor: Arc<dyn DominantColorExtractor>,
        thumbnail_size: u32,
    ) -> Self {
        Self {
            planner,
            extractor,
            thumbnail_size,
        }
    }

    pub fn planner(&self) -> &WashPlanner {
        &self.planner
    }

    /// Analyze `uploads` and schedule their dominant colors.
    ///
    /// Images that cannot be used are skipped and reported in the plan;
    /// the call only fails when there are no uploads at all or none of them
    /// yields a color.
    pub async fn analyze(&self, uploads: Vec<Upload>) -> Result<SortOutcome, ServiceError> {
        self.analyze_entries(uploads.into_iter().map(Ok).collect())
            .await
    }

    /// Read image files from disk and analyze them.
    ///
    /// A file that cannot be read is skipped like any other unusable image,
    /// keeping its position in `paths` as its input index.
    pub async fn analyze_files(&self, paths: &[PathBuf]) -> Result<SortOutcome, ServiceError> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let file_name = file_label(path);
            match tokio::fs::read(path).await {
                Ok(bytes) => entries.push(Ok(Upload {
                    file_name,
                    content_type: None,
                    bytes,
                })),
                Err(e) => entries.push(Err((
                    file_name,
                    SkipReason::Rejected(format!("failed to read {}: {e}", path.display())),
                ))),
            }
        }
        self.analyze_entries(entries).await
    }

    async fn analyze_entries(
        &self,
        entries: Vec<Result<Upload, (String, SkipReason)>>,
    ) -> Result<SortOutcome, ServiceError> {
        if entries.is_empty() {
            return Err(ServiceError::NoImages);
        }

        let total = entries.len();
        let mut thumbnails: Vec<Option<String>> = vec![None; total];
        let mut descriptors = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        // Reject before spawning; keep handles in input order
        let mut handles = Vec::with_capacity(total);
        for (index, entry) in entries.into_iter().enumerate() {
            let upload = match entry {
                Ok(upload) => upload,
                Err((file_name, reason)) => {
                    handles.push((index, file_name, Err(reason)));
                    continue;
                }
            };

            if let Some(content_type) = upload.content_type.as_deref() {
                if !content_type.starts_with("image/") {
                    handles.push((
                        index,
                        upload.file_name,
                        Err(SkipReason::Rejected(format!(
                            "not an image (content type {content_type})"
                        ))),
                    ));
                    continue;
                }
            }

            let planner = self.planner.clone();
            let extractor = self.extractor.clone();
            let size = self.thumbnail_size;
            let file_name = upload.file_name.clone();
            let handle = tokio::task::spawn_blocking(move || {
                analyze_one(
                    &planner,
                    extractor.as_ref(),
                    size,
                    &file_name,
                    index,
                    &upload.bytes,
                )
            });
            handles.push((index, upload.file_name, Ok(handle)));
        }

        for (index, file_name, pending) in handles {
            let result = match pending {
                Err(reason) => Err(reason),
                Ok(handle) => match handle.await {
                    Ok(result) => result,
                    Err(e) => Err(SkipReason::Rejected(format!("worker task failed: {e}"))),
                },
            };

            match result {
                Ok(analyzed) => {
                    tracing::debug!(
                        file = %file_name,
                        hex = analyzed.descriptor.hex(),
                        lightness = analyzed.descriptor.lightness(),
                        hue = analyzed.descriptor.hue(),
                        requires_wash = analyzed.descriptor.requires_wash(),
                        "Extracted color"
                    );
                    thumbnails[index] = Some(analyzed.thumbnail_url);
                    descriptors.push(analyzed.descriptor);
                }
                Err(reason) => {
                    tracing::warn!(file = %file_name, reason = %reason, "Skipping image");
                    skipped.push(SkippedImage::new(file_name, index, reason));
                }
            }
        }

        let plan = self.planner.plan_descriptors(descriptors, skipped)?;

        tracing::info!(
            images = total,
            colors = plan.ordered().len(),
            skipped = plan.skipped().len(),
            batches = plan.batches().len(),
            washes_saved = plan.washes_saved(),
            "Planned wash batches"
        );

        Ok(SortOutcome { plan, thumbnails })
    }
}

/// File name without directories, falling back to the full path
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode one image and build its descriptor (blocking).
fn analyze_one(
    planner: &WashPlanner,
    extractor: &dyn DominantColorExtractor,
    size: u32,
    file_name: &str,
    index: usize,
    bytes: &[u8],
) -> Result<Analyzed, SkipReason> {
    let decoded = decode_image(bytes, size).map_err(|e| SkipReason::Rejected(e.to_string()))?;

    let rgb = match extractor.extract(&decoded.pixels) {
        Some(rgb) => rgb,
        None => {
            tracing::debug!(file = %file_name, "No dominant color, using first pixel");
            fallback_pixel(&decoded.pixels).ok_or(SkipReason::NoColor)?
        }
    };

    Ok(Analyzed {
        descriptor: planner.describe(file_name, index, rgb),
        thumbnail_url: decoded.thumbnail_url,
    })
}
