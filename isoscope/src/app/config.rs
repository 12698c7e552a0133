use super::AppError;
use isoscope_core::grid::CatchmentGeometryFormat;
use serde::{Deserialize, Serialize};

/// application parameters for enriching catchment results with grid
/// geometry.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AppConfig {
    /// h3 resolution used when dissolving catchments into geometries
    pub resolution: u8,
    /// serialization format for dissolved catchment geometries
    pub geometry_format: CatchmentGeometryFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            resolution: 8,
            geometry_format: CatchmentGeometryFormat::default(),
        }
    }
}

impl TryFrom<&str> for AppConfig {
    type Error = AppError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::FileReadError(path.to_string(), e))?;
        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigurationError(format!("{e}")))?;
        Ok(config)
    }
}
