// src/handlers/drivers.rs
use astra::Request;
use tracing::warn;

use crate::app::AppContext;
use crate::domain::{DriverDraft, SaveOutcome};
use crate::request::{field, parse_query, read_form};
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::drivers_page;

/// GET /drivers (optionally `?edit=<driver id>`)
pub fn page(req: &Request, app: &AppContext) -> ResultResp {
    let query = parse_query(req);

    let markup = app.with_ledger(|ledger| {
        let notices = ledger.notices().drain();
        let drivers = ledger.drivers();
        let editing = field(&query, "edit").and_then(|id| drivers.get(id));
        Ok(drivers_page(drivers.list(), editing, &notices))
    })?;

    html_response(markup)
}

/// POST /drivers
pub fn save(mut req: Request, app: &AppContext) -> ResultResp {
    let form = read_form(&mut req, app.max_body_bytes)?;
    let id = field(&form, "id");
    let draft = DriverDraft {
        name: field(&form, "name").unwrap_or_default().to_string(),
        zone: field(&form, "zone").unwrap_or_default().to_string(),
    };

    app.with_ledger(|ledger| {
        match ledger.save_driver(draft, id) {
            Ok(SaveOutcome::Created(_)) => ledger.notices().success("Driver added."),
            Ok(SaveOutcome::Updated(_)) => ledger.notices().success("Driver updated."),
            Err(e) => {
                warn!(error = %e, "driver not saved");
                ledger.notices().error(format!("Could not save the driver: {e}."));
            }
        }
        Ok(())
    })?;

    redirect("/drivers")
}

/// POST /drivers/<id>/delete
pub fn delete(id: &str, app: &AppContext) -> ResultResp {
    app.with_ledger(|ledger| {
        if ledger.delete_driver(id) {
            ledger.notices().success("Driver deleted.");
        } else {
            ledger.notices().info("That driver no longer exists.");
        }
        Ok(())
    })?;
    redirect("/drivers")
}
