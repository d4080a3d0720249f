// src/handlers/data.rs
use astra::Request;
use tracing::{error, warn};

use crate::app::AppContext;
use crate::errors::ServerError;
use crate::request::{content_type, parse_pairs, read_body};
use crate::responses::{json_download_response, redirect, ResultResp};

pub const BACKUP_FILENAME: &str = "delivery-ledger-backup.json";

/// GET /export: every collection as one JSON download.
pub fn export(app: &AppContext) -> ResultResp {
    let document = app.with_ledger(|ledger| {
        let document = ledger.export().map_err(|e| {
            error!(error = %e, "export failed");
            ServerError::InternalError
        })?;
        ledger.notices().success("Data exported successfully.");
        Ok(document)
    })?;

    json_download_response(document, BACKUP_FILENAME)
}

/// POST /import: either a form with a `document` field or the raw JSON body.
pub fn import(mut req: Request, app: &AppContext) -> ResultResp {
    let is_form = content_type(&req)
        .is_some_and(|m| m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str());
    let body = read_body(&mut req, app.max_body_bytes)?;

    let text = if is_form {
        Some(parse_pairs(&body).remove("document").unwrap_or_default())
    } else {
        String::from_utf8(body).ok()
    };

    app.with_ledger(|ledger| {
        let Some(text) = text else {
            ledger
                .notices()
                .error("Import rejected: the file is not UTF-8 text.");
            return Ok(());
        };

        match ledger.import(&text) {
            Ok(()) => ledger.notices().success("Data imported successfully."),
            Err(e) => {
                warn!(error = %e, "import rejected");
                ledger.notices().error(format!("Import rejected: {e}."));
            }
        }
        Ok(())
    })?;

    redirect("/")
}

/// POST /data/clear
pub fn clear(app: &AppContext) -> ResultResp {
    app.with_ledger(|ledger| {
        ledger.clear_all();
        ledger.notices().info("All data has been deleted.");
        Ok(())
    })?;
    redirect("/")
}
