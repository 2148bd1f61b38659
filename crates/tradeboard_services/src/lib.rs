//! Tradeboard Services Layer
//!
//! Settings and the sampling service built on the core generator.

pub mod sampler;
pub mod settings;

pub use sampler::{SampleError, SampleReport, Sampler, UniformityReport};
pub use settings::{SamplerSettings, Settings, SettingsError, UniformitySettings};

/// Load settings from `path`, or fall back to defaults when no path is given.
pub fn init_services(path: Option<&std::path::Path>) -> Result<Settings, SettingsError> {
    let settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    tracing::debug!(?settings, "services initialized");
    Ok(settings)
}
