use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the progress record, relative to the working directory
pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";

/// Zoom factor applied per wheel step
pub const DEFAULT_ZOOM_STEP: f32 = 1.1;

/// Lowest scale a zoom-out step may reach
pub const DEFAULT_MIN_SCALE: f32 = 0.05;

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Where reading progress is persisted
    pub progress_file: PathBuf,
    /// Multiplier for one zoom-in step (and divisor for zoom-out)
    pub zoom_step: f32,
    /// Scale at session start
    pub initial_scale: f32,
    /// Zoom floor; steps below it are ignored
    pub min_scale: f32,
    /// Optional zoom ceiling
    pub max_scale: Option<f32>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            progress_file: PathBuf::from(DEFAULT_PROGRESS_FILE),
            zoom_step: DEFAULT_ZOOM_STEP,
            initial_scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: None,
        }
    }
}

impl ReaderOptions {
    /// Load options from JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ReaderError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ReaderError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from `path`, falling back to defaults when the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save options to JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReaderError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            ReaderError::Config(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.progress_file.as_os_str().is_empty() {
            return Err(ReaderError::Config(
                "Progress file path must not be empty".to_string(),
            ));
        }

        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ReaderError::Config(format!(
                "Zoom step must be greater than 1.0, got {}",
                self.zoom_step
            )));
        }

        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(ReaderError::Config(format!(
                "Minimum scale must be positive, got {}",
                self.min_scale
            )));
        }

        if let Some(max) = self.max_scale {
            if !max.is_finite() || max < self.min_scale {
                return Err(ReaderError::Config(format!(
                    "Maximum scale {} is below minimum scale {}",
                    max, self.min_scale
                )));
            }
        }

        if !self.accepts_scale(self.initial_scale) {
            return Err(ReaderError::Config(format!(
                "Initial scale {} is outside the allowed zoom range",
                self.initial_scale
            )));
        }

        Ok(())
    }

    /// Whether `scale` lies within the configured zoom bounds
    pub fn accepts_scale(&self, scale: f32) -> bool {
        scale.is_finite()
            && scale >= self.min_scale
            && self.max_scale.is_none_or(|max| scale <= max)
    }
}
