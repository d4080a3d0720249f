// src/handlers/ocr.rs
use astra::Request;

use crate::app::AppContext;
use crate::ocr::extract_or_message;
use crate::request::{content_type, read_body};
use crate::responses::{text_response, ResultResp};

pub const NOT_CONFIGURED: &str = "Text extraction is not configured on this server.";

/// POST /ocr: raw image body in, plain text out. Failures come back as a
/// readable message with status 200.
pub fn extract(mut req: Request, app: &AppContext) -> ResultResp {
    let Some(extractor) = app.extractor() else {
        return text_response(NOT_CONFIGURED.to_string());
    };

    let Some(media_type) = content_type(&req) else {
        return text_response(
            "Could not process the image: missing or invalid Content-Type".to_string(),
        );
    };

    let image = match read_body(&mut req, app.max_body_bytes) {
        Ok(image) => image,
        Err(e) => return text_response(format!("Could not process the image: {e}")),
    };

    text_response(extract_or_message(extractor, &image, &media_type))
}
