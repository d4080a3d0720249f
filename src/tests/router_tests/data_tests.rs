// src/tests/router_tests/data_tests.rs

use crate::db::BlobStore;
use crate::domain::codec::CURRENT_RECORDS_KEY;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, init_test_db, post_form, post_raw, sqlite_app, test_app,
};

const BACKUP: &str = r#"{
  "currentRecords": [
    {"id": "r1", "driverName": "Ana", "zone": "Norte", "isSubstitute": false,
     "locations": ["Mall"], "systemPackages": 3, "offSystemPackages": 2}
  ],
  "worksheets": [
    {"id": "w1", "date": "2024-03-10T08:00:00Z", "records": []}
  ],
  "titularDrivers": [
    {"id": "d1", "name": "Luis", "zone": "Sur"}
  ]
}"#;

#[test]
fn export_is_a_json_download() {
    let app = test_app();
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();

    let resp = handle(get("/export"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"delivery-ledger-backup.json\"")
    );

    let doc: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(doc["currentRecords"][0]["driverName"], "Ana");
    assert!(doc["worksheets"].as_array().unwrap().is_empty());
    assert!(doc["titularDrivers"].as_array().unwrap().is_empty());
}

#[test]
fn raw_json_import_replaces_everything() {
    let app = test_app();
    handle(post_form("/records", "driverName=Old&zone=X"), &app).unwrap();

    let resp = handle(
        post_raw("/import", "application/json", BACKUP.as_bytes().to_vec()),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let (records, sheets, drivers) = app
        .with_ledger(|l| {
            Ok((
                l.records().list().to_vec(),
                l.worksheets().len(),
                l.drivers().list().len(),
            ))
        })
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "r1");
    assert_eq!(sheets, 1);
    assert_eq!(drivers, 1);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Data imported successfully."));
}

#[test]
fn form_import_reads_document_field() {
    let app = test_app();
    let encoded: String = url::form_urlencoded::byte_serialize(BACKUP.as_bytes()).collect();

    handle(post_form("/import", &format!("document={encoded}")), &app).unwrap();

    assert_eq!(app.with_ledger(|l| Ok(l.drivers().list().len())).unwrap(), 1);
}

#[test]
fn invalid_import_changes_nothing() {
    let app = test_app();
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();

    handle(
        post_raw(
            "/import",
            "application/json",
            br#"{"currentRecords": [], "titularDrivers": []}"#.to_vec(),
        ),
        &app,
    )
    .unwrap();

    assert_eq!(app.with_ledger(|l| Ok(l.records().len())).unwrap(), 1);
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Import rejected"));
    assert!(body.contains("worksheets"));
}

#[test]
fn clearing_wipes_memory_and_storage() {
    let db = init_test_db();
    let app = sqlite_app(db.clone());
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();
    assert!(db.get(CURRENT_RECORDS_KEY).unwrap().is_some());

    handle(post_form("/data/clear", ""), &app).unwrap();

    assert!(app.with_ledger(|l| Ok(l.records().is_empty())).unwrap());
    assert!(db.get(CURRENT_RECORDS_KEY).unwrap().is_none());
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("All data has been deleted."));
}

#[test]
fn saved_data_survives_a_reload() {
    let db = init_test_db();
    {
        let app = sqlite_app(db.clone());
        handle(post_form("/drivers", "name=Ana&zone=Norte"), &app).unwrap();
        handle(post_form("/records", "driverName=Ana&zone="), &app).unwrap();
        handle(post_form("/worksheets/archive", ""), &app).unwrap();
    }

    let app = sqlite_app(db);
    let (records, sheets, drivers) = app
        .with_ledger(|l| {
            Ok((
                l.records().len(),
                l.worksheets().to_vec(),
                l.drivers().list().len(),
            ))
        })
        .unwrap();
    assert_eq!(records, 0);
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].records[0].zone, "Norte");
    assert_eq!(drivers, 1);
}

#[test]
fn imported_entries_without_usable_ids_stay_reachable() {
    let app = test_app();
    let doc = r#"{
      "currentRecords": [
        {"id": "", "driverName": "Ana", "zone": "Norte"},
        {"id": 1700000000000, "driverName": "Eva", "zone": "Sur", "systemPackages": -4}
      ],
      "worksheets": [
        {"id": "current", "date": "2024-03-10T08:00:00Z",
         "records": [{"driverName": "Luis", "zone": "Este"}]}
      ],
      "titularDrivers": []
    }"#;

    handle(post_raw("/import", "application/json", doc.as_bytes().to_vec()), &app).unwrap();

    let (record_ids, ws_id) = app
        .with_ledger(|l| {
            Ok((
                l.records().list().iter().map(|r| r.id.clone()).collect::<Vec<_>>(),
                l.worksheets()[0].id.clone(),
            ))
        })
        .unwrap();
    assert!(!record_ids[0].is_empty());
    assert_eq!(record_ids[1], "1700000000000");
    assert_ne!(ws_id, "current");

    handle(post_form("/view", &format!("view={ws_id}")), &app).unwrap();
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("read-only-banner"));
    assert!(body.contains("Luis"));

    handle(post_form("/view", "view=current"), &app).unwrap();
    handle(
        post_form(&format!("/records/{}/delete", record_ids[0]), ""),
        &app,
    )
    .unwrap();
    assert_eq!(app.with_ledger(|l| Ok(l.records().len())).unwrap(), 1);
}
