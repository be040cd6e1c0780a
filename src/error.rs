use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("division by zero: lower-is-better statistic '{key}' has value 0")]
    DivisionByZero { key: String },

    #[error("missing statistic: {0}")]
    MissingStatistic(String),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("no weights configured for profile: {0}")]
    UnknownProfile(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RatingError>;
