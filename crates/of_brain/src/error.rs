use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrainError {
    #[error("Network has no trained layers")]
    Untrained,

    #[error("Shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch { context: &'static str, expected: usize, found: usize },

    #[error("Non-finite parameters in layer {layer}")]
    NonFiniteParameters { layer: usize },

    #[error("Non-finite output on channel {channel}")]
    NonFiniteOutput { channel: usize },

    #[error("Training batch is empty")]
    EmptyBatch,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrainError {
    /// 네트워크 상태 자체가 망가진 경우 (리셋 대상)
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            BrainError::Untrained
                | BrainError::ShapeMismatch { .. }
                | BrainError::NonFiniteParameters { .. }
                | BrainError::NonFiniteOutput { .. }
        )
    }
}

impl From<serde_json::Error> for BrainError {
    fn from(err: serde_json::Error) -> Self {
        BrainError::ConfigParse(err.to_string())
    }
}

impl From<serde_yaml::Error> for BrainError {
    fn from(err: serde_yaml::Error) -> Self {
        BrainError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BrainError>;
