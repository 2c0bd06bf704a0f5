use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid lineup: expected {expected} players, found {found}")]
    InvalidLineup { expected: usize, found: usize },

    #[error("Invalid match config: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error(transparent)]
    Invalid(#[from] MatchError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("Player is already at the highest rank")]
    AlreadyMaxRank,

    #[error("Too many upgrade materials: max {max}, found {found}")]
    TooManyMaterials { max: usize, found: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchmakingError {
    #[error("No opponent within the rating window")]
    NoCandidates,

    #[error("No opponent with a complete lineup after {attempts} attempts")]
    NoReadyOpponent { attempts: usize },
}

impl MatchError {
    /// Lineup errors come from caller input; config errors from deployment.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, MatchError::InvalidLineup { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
