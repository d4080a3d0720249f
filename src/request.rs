// src/request.rs
use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use mime::Mime;

use crate::errors::ServerError;

/// Decoded query string; later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_pairs(q.as_bytes()))
        .unwrap_or_default()
}

pub fn parse_pairs(bytes: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

pub fn content_type(req: &Request) -> Option<Mime> {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Mime>().ok())
}

/// Read the whole body, refusing anything over `limit` bytes.
pub fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::BadRequest(format!(
            "request body exceeds {limit} bytes"
        )));
    }
    Ok(buf)
}

/// Read an `application/x-www-form-urlencoded` body.
pub fn read_form(req: &mut Request, limit: usize) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req, limit)?;
    Ok(parse_pairs(&body))
}

/// Trimmed value, `None` when missing or blank.
pub fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    form.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}
