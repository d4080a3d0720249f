// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 200 with `Content-Disposition: attachment`, so browsers save instead of render.
pub fn attachment_response(body: Body, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(body)
        .map_err(|_| ServerError::InternalError)
}

pub fn json_download_response(document: String, filename: &str) -> ResultResp {
    attachment_response(
        Body::from(document),
        "application/json; charset=utf-8",
        filename,
    )
}

pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment_response(Body::from(buffer), XLSX_CONTENT_TYPE, filename)
}
