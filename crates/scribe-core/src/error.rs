pub type Result<T> = std::result::Result<T, ScribeError>;

#[derive(thiserror::Error, Debug)]
pub enum ScribeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("canvas error: {0}")]
    Canvas(String),

    #[error("assistant error: {0}")]
    Assistant(String),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("encoding error: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScribeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    pub fn assistant(msg: impl Into<String>) -> Self {
        Self::Assistant(msg.into())
    }
}
