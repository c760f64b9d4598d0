use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickQrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("QR service responded with status {0}")]
    Status(u16),

    #[error("response body is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuickQrError>;
