use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use wash_batch::PlanConfig;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Wash rule and batching thresholds
    #[serde(default)]
    pub wash: WashConfig,

    /// Upload limits and thumbnail size
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Thresholds passed to the wash planner
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WashConfig {
    /// Upper bound of the red hue family in degrees (inclusive)
    pub hue_max: f64,

    /// Near-black YIQ brightness bound on the 0-255 scale (inclusive)
    pub black_brightness_max: f64,

    /// CIEDE2000 distance above which consecutive colors need a wash
    pub delta_e_threshold: f64,
}

impl Default for WashConfig {
    fn default() -> Self {
        let plan = PlanConfig::default();
        Self {
            hue_max: plan.wash_hue_max,
            black_brightness_max: plan.black_brightness_max,
            delta_e_threshold: plan.delta_e_threshold,
        }
    }
}

/// Limits for the upload endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum number of images per request
    pub max_files: usize,

    /// Maximum size of a single image in bytes
    pub max_file_bytes: usize,

    /// Edge length of the square thumbnail images are normalized to
    pub thumbnail_size: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: 10,
            max_file_bytes: 10 * 1024 * 1024,
            thumbnail_size: 200,
        }
    }
}

impl UploadConfig {
    /// Request body limit covering `max_files` full-size images.
    ///
    /// Adds 64 KiB for multipart framing.
    pub fn body_limit(&self) -> usize {
        self.max_files
            .saturating_mul(self.max_file_bytes)
            .saturating_add(64 * 1024)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("Invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl AppConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// No path, or a path that does not exist, gives the built-in defaults.
    /// A file that exists but cannot be read, parsed or validated is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            hue_max = config.wash.hue_max,
            black_brightness_max = config.wash.black_brightness_max,
            delta_e_threshold = config.wash.delta_e_threshold,
            max_files = config.upload.max_files,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wash = &self.wash;

        if !(0.0..=360.0).contains(&wash.hue_max) {
            return Err(ConfigError::Invalid {
                field: "wash.hue_max",
                reason: format!("must be between 0 and 360, got {}", wash.hue_max),
            });
        }
        if wash.black_brightness_max.is_nan() || wash.black_brightness_max < 0.0 {
            return Err(ConfigError::Invalid {
                field: "wash.black_brightness_max",
                reason: format!("must be a non-negative number, got {}", wash.black_brightness_max),
            });
        }
        if wash.delta_e_threshold.is_nan() || wash.delta_e_threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "wash.delta_e_threshold",
                reason: format!("must be a non-negative number, got {}", wash.delta_e_threshold),
            });
        }
        if self.upload.max_files == 0 {
            return Err(ConfigError::Invalid {
                field: "upload.max_files",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.upload.max_file_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "upload.max_file_bytes",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.upload.thumbnail_size == 0 {
            return Err(ConfigError::Invalid {
                field: "upload.thumbnail_size",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Planner configuration for the core crate.
    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig::default()
            .wash_hue_max(self.wash.hue_max)
            .black_brightness_max(self.wash.black_brightness_max)
            .delta_e_threshold(self.wash.delta_e_threshold)
    }
}
