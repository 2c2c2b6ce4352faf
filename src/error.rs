use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("unknown experience level: {0:?}")]
    UnknownLevel(String),
}
