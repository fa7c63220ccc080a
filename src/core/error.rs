use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Input stream closed while waiting for {prompt}")]
    InputClosed { prompt: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
