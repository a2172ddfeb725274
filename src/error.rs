use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum BibleQRError {
    // URL builder
    #[error("Unknown book name: '{0}'")]
    UnknownBook(String),

    // QR encoder
    #[error("Cannot encode payload as QR: {0}")]
    Encoding(#[from] qrcode::types::QrError),
    #[error("Invalid scale {0}, must be at least 1 and keep the image under 2^26 pixels")]
    InvalidScale(u32),
    #[error("Cannot write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot write PNG: {0}")]
    Image(#[from] image::ImageError),
}

pub type BibleQRResult<T> = Result<T, BibleQRError>;
