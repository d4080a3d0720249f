// src/handlers/records.rs
use std::collections::HashMap;

use astra::Request;
use tracing::warn;

use crate::app::AppContext;
use crate::domain::{parse_package_count, RecordDraft, SaveOutcome};
use crate::request::{field, parse_query, read_form};
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::components::zone_field;
use crate::templates::pages::{home_page, HomeVm};

/// GET / (optionally `?edit=<record id>`)
pub fn home(req: &Request, app: &AppContext) -> ResultResp {
    let query = parse_query(req);
    let ocr_enabled = app.extractor().is_some();

    let markup = app.with_ledger(|ledger| {
        let notices = ledger.notices().drain();
        let ledger = &*ledger;

        let read_only = ledger.is_read_only();
        let editing = match field(&query, "edit") {
            Some(id) if !read_only => ledger.records().get(id),
            _ => None,
        };

        let mut known_drivers: Vec<&str> = ledger.drivers().zone_map().into_keys().collect();
        known_drivers.sort_unstable();

        let vm = HomeVm {
            records: ledger.active_records(),
            summary: ledger.summary(),
            worksheets: ledger.worksheets(),
            active: ledger.active_view(),
            read_only,
            editing,
            known_drivers,
            notices,
            ocr_enabled,
        };
        Ok(home_page(&vm))
    })?;

    html_response(markup)
}

/// POST /records
pub fn save(mut req: Request, app: &AppContext) -> ResultResp {
    let form = read_form(&mut req, app.max_body_bytes)?;
    let id = field(&form, "id");
    let draft = draft_from_form(&form);

    let saved = app.with_ledger(|ledger| {
        let saved = match ledger.save_record(draft, id) {
            Ok(SaveOutcome::Created(_)) => {
                ledger.notices().success("Record saved.");
                true
            }
            Ok(SaveOutcome::Updated(_)) => {
                ledger.notices().success("Record updated.");
                true
            }
            Err(e) => {
                warn!(error = %e, "record not saved");
                ledger.notices().error(format!("Could not save the record: {e}."));
                false
            }
        };
        Ok(saved)
    })?;

    // A rejected edit goes back to the form it came from.
    match (saved, id) {
        (false, Some(id)) => redirect(&format!("/?edit={}", encode(id))),
        _ => redirect("/"),
    }
}

/// POST /records/<id>/delete
pub fn delete(id: &str, app: &AppContext) -> ResultResp {
    app.with_ledger(|ledger| {
        match ledger.delete_record(id) {
            Ok(true) => ledger.notices().success("Record deleted."),
            Ok(false) => ledger.notices().info("That record no longer exists."),
            Err(e) => ledger.notices().error(format!("Could not delete the record: {e}.")),
        }
        Ok(())
    })?;
    redirect("/")
}

/// GET /records/zone-hint?driverName=..&zone=..
///
/// Re-renders the zone input, filled from the titular driver list when the
/// name is known and otherwise left as typed.
pub fn zone_hint(req: &Request, app: &AppContext) -> ResultResp {
    let query = parse_query(req);
    let name = query.get("driverName").map(String::as_str).unwrap_or("");
    let typed = query.get("zone").map(String::as_str).unwrap_or("");

    let suggested = app.with_ledger(|ledger| Ok(ledger.suggest_zone(name).map(str::to_string)))?;

    html_response(zone_field(suggested.as_deref().unwrap_or(typed)))
}

pub(crate) fn draft_from_form(form: &HashMap<String, String>) -> RecordDraft {
    let mut draft = RecordDraft {
        driver_name: field(form, "driverName").unwrap_or_default().to_string(),
        zone: field(form, "zone").unwrap_or_default().to_string(),
        is_substitute: form.contains_key("isSubstitute"),
        system_packages: parse_package_count(field(form, "systemPackages").unwrap_or_default()),
        off_system_packages: parse_package_count(
            field(form, "offSystemPackages").unwrap_or_default(),
        ),
        ..RecordDraft::default()
    };

    if let Some(raw) = form.get("locations") {
        for location in raw.split([',', '\n']) {
            draft.add_location(location);
        }
    }
    draft
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
