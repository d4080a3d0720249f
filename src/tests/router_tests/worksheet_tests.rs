// src/tests/router_tests/worksheet_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, location, post_form, test_app};

fn add_record(app: &crate::app::AppContext, name: &str) {
    let body = format!("driverName={name}&zone=Norte&systemPackages=4&offSystemPackages=1");
    handle(post_form("/records", &body), app).unwrap();
}

fn first_worksheet_id(app: &crate::app::AppContext) -> String {
    app.with_ledger(|l| Ok(l.worksheets()[0].id.clone())).unwrap()
}

#[test]
fn archiving_moves_records_into_history() {
    let app = test_app();
    add_record(&app, "Ana");
    add_record(&app, "Luis");

    let resp = handle(post_form("/worksheets/archive", ""), &app).unwrap();
    assert_eq!(resp.status(), 302);

    let (live, archived) = app
        .with_ledger(|l| Ok((l.records().len(), l.worksheets()[0].records.len())))
        .unwrap();
    assert_eq!(live, 0);
    assert_eq!(archived, 2);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Worksheet archived."));
    assert!(body.contains("History: "));
}

#[test]
fn archiving_an_empty_worksheet_is_refused() {
    let app = test_app();

    handle(post_form("/worksheets/archive", ""), &app).unwrap();

    assert!(app.with_ledger(|l| Ok(l.worksheets().is_empty())).unwrap());
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("There are no records on the current worksheet to archive."));
}

#[test]
fn archived_worksheet_is_read_only() {
    let app = test_app();
    add_record(&app, "Ana");
    handle(post_form("/worksheets/archive", ""), &app).unwrap();
    let ws_id = first_worksheet_id(&app);

    handle(post_form("/view", &format!("view={ws_id}")), &app).unwrap();

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("read-only-banner"));
    assert!(body.contains("Ana"));
    assert!(!body.contains("New record"));

    // Writes against the live worksheet are refused while history is shown.
    handle(post_form("/records", "driverName=Luis&zone=Sur"), &app).unwrap();
    handle(post_form("/worksheets/archive", ""), &app).unwrap();

    let (live, sheets) = app
        .with_ledger(|l| Ok((l.records().len(), l.worksheets().len())))
        .unwrap();
    assert_eq!(live, 0);
    assert_eq!(sheets, 1);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("read-only"));
    assert!(body.contains("Could not save the record"));

    // Back to the live worksheet.
    handle(post_form("/view", "view=current"), &app).unwrap();
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(!body.contains("read-only-banner"));
    assert!(body.contains("New record"));
}

#[test]
fn snapshot_of_empty_view_redirects_with_notice() {
    let app = test_app();

    let resp = handle(get("/snapshot"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    let resp = handle(get("/snapshot.xlsx"), &app).unwrap();
    assert_eq!(resp.status(), 302);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("There are no records to download."));
}

#[test]
fn snapshot_page_lists_active_records() {
    let app = test_app();
    add_record(&app, "Ana");

    let resp = handle(get("/snapshot"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Delivery worksheet"));
    assert!(body.contains("Ana"));
}

#[test]
fn snapshot_xlsx_is_a_workbook_download() {
    let app = test_app();
    add_record(&app, "Ana");

    let resp = handle(get("/snapshot.xlsx"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"worksheet-"));
    assert!(disposition.ends_with(".xlsx\""));

    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}
