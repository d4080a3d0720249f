// src/ocr/mod.rs
pub mod gemini;

use mime::Mime;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiExtractor};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported media type '{0}', expected an image")]
    UnsupportedMediaType(String),
    #[error("the image is empty")]
    EmptyImage,
    #[error("request failed: {0}")]
    Request(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("no text was returned")]
    EmptyResponse,
}

/// Turns an uploaded image into text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, image: &[u8], media_type: &Mime) -> Result<String, ExtractionError>;
}

/// Checks shared by every extractor, run before any outside call.
pub fn check_upload(image: &[u8], media_type: &Mime) -> Result<(), ExtractionError> {
    if media_type.type_() != mime::IMAGE {
        return Err(ExtractionError::UnsupportedMediaType(
            media_type.essence_str().to_string(),
        ));
    }
    if image.is_empty() {
        return Err(ExtractionError::EmptyImage);
    }
    Ok(())
}

/// Run the extractor and fold any failure into a message for the user.
pub fn extract_or_message(
    extractor: &dyn TextExtractor,
    image: &[u8],
    media_type: &Mime,
) -> String {
    let result = check_upload(image, media_type)
        .and_then(|_| extractor.extract_text(image, media_type));

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "text extraction failed");
            format!("Could not process the image: {e}")
        }
    }
}
