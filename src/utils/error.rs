use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopfrontError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShopfrontError>;
