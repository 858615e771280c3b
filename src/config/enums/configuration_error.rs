use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
