use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::logging::LoggingConfig;

/// Engine-wide configuration with clinical defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    pub transform: TransformConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Bounds for rigid transforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Maximum rotation magnitude in degrees (exclusive).
    pub max_rotation_deg: f64,
    /// Maximum translation magnitude in millimeters (exclusive).
    pub max_translation_mm: f64,
}

/// Output shaping for comparison reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places reported values are rounded to.
    pub decimals: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: 360.0,
            max_translation_mm: 1000.0,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { decimals: 3 }
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: ConfigFormat,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.transform.max_rotation_deg <= 0.0 || self.transform.max_rotation_deg > 360.0 {
            errors.push("max_rotation_deg must be in (0, 360]".to_string());
        }

        if self.transform.max_translation_mm <= 0.0 {
            errors.push("max_translation_mm must be positive".to_string());
        }

        if self.report.decimals > 12 {
            errors.push("report decimals must be at most 12".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Json,
    Toml,
}

pub fn load_config_or_default(config_path: Option<&str>) -> EngineConfig {
    match config_path {
        Some(path) => match EngineConfig::load_from_file(path) {
            Ok(config) => {
                if let Err(errors) = config.validate() {
                    eprintln!("Configuration validation errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    eprintln!("Using default configuration instead.");
                    EngineConfig::default()
                } else {
                    config
                }
            }
            Err(e) => {
                eprintln!("Failed to load config from '{}': {}", path, e);
                eprintln!("Using default configuration.");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    }
}
