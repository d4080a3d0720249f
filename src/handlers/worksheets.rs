// src/handlers/worksheets.rs
use astra::Request;
use chrono::Utc;

use crate::app::AppContext;
use crate::domain::{ActiveView, LedgerError};
use crate::request::read_form;
use crate::responses::{html_response, redirect, xlsx_response, ResultResp};
use crate::spreadsheets::{export_snapshot_xlsx, snapshot_filename};
use crate::templates::pages::snapshot_page;

/// POST /view, form field `view` = `current` or a worksheet id.
pub fn select(mut req: Request, app: &AppContext) -> ResultResp {
    let form = read_form(&mut req, app.max_body_bytes)?;
    let view = form
        .get("view")
        .map(|v| ActiveView::from_param(v.trim()))
        .unwrap_or(ActiveView::Current);

    app.with_ledger(|ledger| {
        ledger.select_view(view);
        Ok(())
    })?;
    redirect("/")
}

/// POST /worksheets/archive
pub fn archive(app: &AppContext) -> ResultResp {
    app.with_ledger(|ledger| {
        match ledger.archive_current(Utc::now()) {
            Ok(_) => ledger
                .notices()
                .success("Worksheet archived. A new worksheet has been started."),
            Err(LedgerError::NothingToArchive) => ledger
                .notices()
                .error("There are no records on the current worksheet to archive."),
            Err(e) => ledger
                .notices()
                .error(format!("Could not archive the worksheet: {e}.")),
        }
        Ok(())
    })?;
    redirect("/")
}

/// GET /snapshot: printable page of the active view.
pub fn snapshot(app: &AppContext) -> ResultResp {
    let markup = app.with_ledger(|ledger| {
        if ledger.active_records().is_empty() {
            ledger.notices().info("There are no records to download.");
            return Ok(None);
        }
        let date = ledger.active_worksheet_date(Utc::now());
        Ok(Some(snapshot_page(
            ledger.active_records(),
            &ledger.summary(),
            date,
        )))
    })?;

    match markup {
        Some(markup) => html_response(markup),
        None => redirect("/"),
    }
}

/// GET /snapshot.xlsx
pub fn snapshot_xlsx(app: &AppContext) -> ResultResp {
    let file = app.with_ledger(|ledger| {
        if ledger.active_records().is_empty() {
            ledger.notices().info("There are no records to download.");
            return Ok(None);
        }
        let date = ledger.active_worksheet_date(Utc::now());
        let title = format!("Delivery worksheet {}", date.format("%d/%m/%Y"));
        let buffer = export_snapshot_xlsx(ledger.active_records(), &ledger.summary(), &title)?;
        Ok(Some((buffer, snapshot_filename(date))))
    })?;

    match file {
        Some((buffer, filename)) => xlsx_response(buffer, &filename),
        None => redirect("/"),
    }
}
