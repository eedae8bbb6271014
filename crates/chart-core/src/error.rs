use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid baseline for '{key}': {value} (must be finite and non-zero)")]
    InvalidBaseline { key: String, value: f64 },

    #[error("record {index} is missing field '{key}'")]
    MissingField { key: String, index: usize },
}
