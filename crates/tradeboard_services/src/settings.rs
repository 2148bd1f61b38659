//! Settings management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Service settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sampler: SamplerSettings,
    pub uniformity: UniformitySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    /// Draws per sample when the caller does not ask for a count.
    pub default_draws: usize,
    pub max_draws: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniformitySettings {
    pub draws: usize,
    pub mean_low: f64,
    pub mean_high: f64,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            default_draws: 5,
            max_draws: 1_000_000,
        }
    }
}

impl Default for UniformitySettings {
    fn default() -> Self {
        Self {
            draws: 100_000,
            mean_low: 0.45,
            mean_high: 0.55,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading settings");
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let sampler = &self.sampler;
        if sampler.default_draws > sampler.max_draws {
            return Err(SettingsError::Invalid(format!(
                "sampler.default_draws ({}) exceeds sampler.max_draws ({})",
                sampler.default_draws, sampler.max_draws
            )));
        }

        let uniformity = &self.uniformity;
        if uniformity.draws == 0 {
            return Err(SettingsError::Invalid("uniformity.draws must be positive".into()));
        }
        if uniformity.draws > sampler.max_draws {
            return Err(SettingsError::Invalid(format!(
                "uniformity.draws ({}) exceeds sampler.max_draws ({})",
                uniformity.draws, sampler.max_draws
            )));
        }
        let bounds_ok = (0.0..=1.0).contains(&uniformity.mean_low)
            && (0.0..=1.0).contains(&uniformity.mean_high)
            && uniformity.mean_low <= uniformity.mean_high;
        if !bounds_ok {
            return Err(SettingsError::Invalid(format!(
                "uniformity mean bounds [{}, {}] must be ordered within [0, 1]",
                uniformity.mean_low, uniformity.mean_high
            )));
        }
        Ok(())
    }
}
