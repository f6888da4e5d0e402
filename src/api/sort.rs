use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use wash_batch::{ColorDescriptor, SkippedImage, WashPlan};

use crate::error::ApiError;
use crate::models::UploadConfig;
use crate::services::{ColorService, SortOutcome, Upload};

/// Multipart field that carries the images
pub const IMAGES_FIELD: &str = "images";

/// Multipart form accepted by `/sort-colors`
#[derive(Debug, ToSchema)]
pub struct SortColorsForm {
    /// Image files; repeat the field once per file
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}

/// 8-bit sRGB channels
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct RgbEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CIE L*a*b* coordinates (D65)
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct LabEntry {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
}

/// One scheduled color
#[derive(Debug, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: RgbEntry,
    /// Perceived lightness, 0 (black) to 100 (white)
    pub lightness: f64,
    /// HSL hue in degrees
    pub hue: f64,
    pub lab: LabEntry,
    /// Name of the uploaded file the color came from
    pub file_name: String,
    /// JPEG thumbnail as a data URL (absent for plain color input)
    pub image_url: Option<String>,
    /// Whether this color forces a wash before it
    pub requires_wash: bool,
    /// Why the wash is needed, if it is
    pub remarks: Option<String>,
}

impl ColorEntry {
    pub fn new(descriptor: &ColorDescriptor, image_url: Option<String>) -> Self {
        let rgb = descriptor.rgb();
        let lab = descriptor.lab();
        Self {
            hex: descriptor.hex().to_string(),
            rgb: RgbEntry {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            lightness: descriptor.lightness(),
            hue: descriptor.hue(),
            lab: LabEntry {
                l: lab.l,
                a: lab.a,
                b: lab.b,
            },
            file_name: descriptor.source_id().to_string(),
            image_url,
            requires_wash: descriptor.requires_wash(),
            remarks: descriptor.wash_reason().map(|r| r.remark().to_string()),
        }
    }
}

/// An image that contributed no color
#[derive(Debug, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    pub file_name: String,
    /// Position of the file in the upload
    pub index: usize,
    pub reason: String,
}

impl From<&SkippedImage> for SkippedEntry {
    fn from(s: &SkippedImage) -> Self {
        Self {
            file_name: s.source_id.clone(),
            index: s.input_index,
            reason: s.reason.to_string(),
        }
    }
}

/// Response from color sorting
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SortColorsResponse {
    /// All colors, lightest first
    pub sorted_colors: Vec<ColorEntry>,
    /// The same colors split into batches that need no wash in between
    pub grouped_batches: Vec<Vec<ColorEntry>>,
    /// Washes avoided compared to washing after every color
    pub washes_saved: usize,
    /// Files that were ignored, with the reason
    pub skipped: Vec<SkippedEntry>,
}

impl SortColorsResponse {
    /// Build the response, looking thumbnails up by input index.
    pub fn from_plan(plan: &WashPlan, thumbnails: &[Option<String>]) -> Self {
        let entry = |d: &ColorDescriptor| {
            let url = thumbnails.get(d.input_index()).cloned().flatten();
            ColorEntry::new(d, url)
        };

        Self {
            sorted_colors: plan.ordered().iter().map(entry).collect(),
            grouped_batches: plan
                .batches()
                .iter()
                .map(|batch| batch.iter().map(entry).collect())
                .collect(),
            washes_saved: plan.washes_saved(),
            skipped: plan.skipped().iter().map(SkippedEntry::from).collect(),
        }
    }
}

impl From<&SortOutcome> for SortColorsResponse {
    fn from(outcome: &SortOutcome) -> Self {
        Self::from_plan(&outcome.plan, &outcome.thumbnails)
    }
}

/// Sort uploaded garment images into wash batches
///
/// Extracts each image's dominant color, orders the colors from lightest to
/// darkest and groups them into batches that can be dyed back to back.
/// Files that are not images or have no usable color are reported in
/// `skipped`.
#[utoipa::path(
    post,
    path = "/sort-colors",
    request_body(content = SortColorsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Colors sorted and batched", body = SortColorsResponse),
        (status = 400, description = "No images uploaded, no usable colors, or malformed multipart body"),
        (status = 413, description = "Too many files or a file is too large"),
    ),
    tag = "Colors"
)]
pub async fn handle_sort_colors(
    State(service): State<Arc<ColorService>>,
    State(limits): State<Arc<UploadConfig>>,
    mut multipart: Multipart,
) -> Result<Json<SortColorsResponse>, ApiError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.body_text()))?
    {
        if field.name() != Some(IMAGES_FIELD) {
            tracing::debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        if uploads.len() == limits.max_files {
            return Err(ApiError::TooManyFiles {
                max: limits.max_files,
            });
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("image-{}", uploads.len() + 1));
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Multipart(e.body_text()))?;

        if bytes.len() > limits.max_file_bytes {
            return Err(ApiError::FileTooLarge {
                file_name,
                max: limits.max_file_bytes,
            });
        }

        uploads.push(Upload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    tracing::info!(files = uploads.len(), "Received images for sorting");

    let outcome = service.analyze(uploads).await?;
    Ok(Json(SortColorsResponse::from(&outcome)))
}
