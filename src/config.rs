use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use serde_yaml::from_reader;
use tracing::{debug, info, instrument};

use crate::error::ReturnsError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalculatorConfig {
    #[serde(rename = "date-column", default = "default_date_column")]
    pub date_column: String,
    #[serde(rename = "close-column", default = "default_close_column")]
    pub close_column: String,
    #[serde(rename = "date-formats", default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

const DEFAULT_CONFIG_FILE: &str = "pricereturns.yml";

fn default_date_column() -> String {
    "date".to_string()
}

fn default_close_column() -> String {
    "close".to_string()
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            close_column: default_close_column(),
            date_formats: default_date_formats(),
        }
    }
}

impl CalculatorConfig {
    /// Reads the configuration from a YAML file.
    ///
    /// If the file does not exist the default configuration is returned; nothing is written.
    ///
    /// # Arguments
    ///
    /// * `filename` - Optional path to the configuration file.
    ///
    /// # Returns
    ///
    /// A `Result` containing the validated `CalculatorConfig` on success.
    #[instrument(level = "info", skip(filename))]
    pub fn read_config<P: AsRef<Path>>(filename: Option<P>) -> Result<Self, ReturnsError> {
        let path = filename
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE).to_path_buf());

        info!(path = %path.display(), "Reading configuration");

        if !path.exists() {
            debug!(
                "Config file does not exist at {}. Using defaults",
                path.display()
            );
            return Ok(CalculatorConfig::default());
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let config: Self = from_reader(reader)?;
        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Checks that column names are usable and at least one date format is given.
    pub fn validate(&self) -> Result<(), ReturnsError> {
        if self.date_column.trim().is_empty() {
            return Err(ReturnsError::ConfigError(
                "date-column cannot be empty".to_string(),
            ));
        }
        if self.close_column.trim().is_empty() {
            return Err(ReturnsError::ConfigError(
                "close-column cannot be empty".to_string(),
            ));
        }
        if self.date_column == self.close_column {
            return Err(ReturnsError::ConfigError(format!(
                "date-column and close-column must differ (both are '{}')",
                self.date_column
            )));
        }
        if self.date_formats.is_empty() {
            return Err(ReturnsError::ConfigError(
                "date-formats must list at least one format".to_string(),
            ));
        }
        Ok(())
    }
}
