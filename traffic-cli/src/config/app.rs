use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
#[validate(schema(function = "validate_distinct_ids"))]
pub struct AppConfig {
    pub vehicle_id: u32,
    pub vendor_id: u32,
    pub metrics_enabled: bool,
    pub metrics_id: u32,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

fn validate_distinct_ids(config: &AppConfig) -> Result<(), ValidationError> {
    let clash = config.vehicle_id == config.vendor_id
        || (config.metrics_enabled
            && (config.metrics_id == config.vehicle_id || config.metrics_id == config.vendor_id));
    if clash {
        return Err(ValidationError::new("duplicate_observer_id"));
    }
    Ok(())
}
