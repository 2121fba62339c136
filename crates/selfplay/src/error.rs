use chess_rules::ChessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("rules engine error: {0}")]
    Chess(#[from] ChessError),

    #[error("{engine} returned no move in an ongoing game")]
    NoMove { engine: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("results serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
