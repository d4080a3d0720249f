use crate::app::AppContext;
use crate::errors::ServerError;
use crate::handlers::{data, drivers, ocr, records, worksheets};
use crate::responses::ResultResp;
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, app: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => records::home(&req, app),
        ("POST", "/records") => records::save(req, app),
        ("GET", "/records/zone-hint") => records::zone_hint(&req, app),

        ("POST", "/view") => worksheets::select(req, app),
        ("POST", "/worksheets/archive") => worksheets::archive(app),
        ("GET", "/snapshot") => worksheets::snapshot(app),
        ("GET", "/snapshot.xlsx") => worksheets::snapshot_xlsx(app),

        ("GET", "/drivers") => drivers::page(&req, app),
        ("POST", "/drivers") => drivers::save(req, app),

        ("GET", "/export") => data::export(app),
        ("POST", "/import") => data::import(req, app),
        ("POST", "/data/clear") => data::clear(app),

        ("POST", "/ocr") => ocr::extract(req, app),

        ("POST", p) => {
            if let Some(id) = member_action(p, "/records/", "/delete") {
                records::delete(id, app)
            } else if let Some(id) = member_action(p, "/drivers/", "/delete") {
                drivers::delete(id, app)
            } else {
                Err(ServerError::NotFound)
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// `/records/<id>/delete` -> `<id>`; the id must be a single, non-empty segment.
fn member_action<'a>(path: &'a str, prefix: &str, action: &str) -> Option<&'a str> {
    let id = path.strip_prefix(prefix)?.strip_suffix(action)?;
    (!id.is_empty() && !id.contains('/')).then_some(id)
}
