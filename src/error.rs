#[derive(Debug, thiserror::Error)]
pub enum ReturnsError {
    #[error("Input frame must contain a '{column}' column.")]
    MissingColumn { column: String },
    #[error("Failed to parse date value '{value}' at row {row}.")]
    DateParse { row: usize, value: String },
    #[error("Column '{column}' holds a non-numeric value '{value}' at row {row}.")]
    NonNumericColumn {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Column '{column}' has {found} values but the frame has {expected} rows.")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde YAML Error: {0}")]
    SerdeYamlError(#[from] serde_yaml::Error),
}

impl ReturnsError {
    pub(crate) fn missing_column(column: &str) -> Self {
        ReturnsError::MissingColumn {
            column: column.to_string(),
        }
    }
}
