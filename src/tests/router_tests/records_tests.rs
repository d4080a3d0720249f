// src/tests/router_tests/records_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, test_app};

#[test]
fn home_page_loads_with_empty_worksheet() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("No records on this worksheet yet."));
    assert!(body.contains("New record"));
}

#[test]
fn saving_a_record_redirects_and_lists_it() {
    let app = test_app();

    let resp = handle(
        post_form(
            "/records",
            "driverName=Ana&zone=Norte&locations=Mall%2C+Port&systemPackages=5&offSystemPackages=2",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    let record = app
        .with_ledger(|l| Ok(l.records().list()[0].clone()))
        .unwrap();
    assert_eq!(record.driver_name, "Ana");
    assert_eq!(record.locations, vec!["Mall", "Port"]);
    assert_eq!(record.total_packages(), 7);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Record saved."));
    assert!(body.contains("Mall, Port"));

    // Notices are shown once.
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(!body.contains("Record saved."));
}

#[test]
fn record_without_zone_is_refused() {
    let app = test_app();

    let resp = handle(post_form("/records", "driverName=Luis&zone=+"), &app).unwrap();
    assert_eq!(resp.status(), 302);

    assert_eq!(app.with_ledger(|l| Ok(l.records().len())).unwrap(), 0);
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Could not save the record: zone is required."));
}

#[test]
fn blank_zone_is_filled_from_titular_driver() {
    let app = test_app();
    handle(post_form("/drivers", "name=Ana&zone=Norte"), &app).unwrap();

    handle(post_form("/records", "driverName=Ana&zone="), &app).unwrap();

    let zone = app
        .with_ledger(|l| Ok(l.records().list()[0].zone.clone()))
        .unwrap();
    assert_eq!(zone, "Norte");
}

#[test]
fn zone_hint_returns_partial_field() {
    let app = test_app();
    handle(post_form("/drivers", "name=Ana+Mar%C3%ADa&zone=Sur"), &app).unwrap();

    let resp = handle(
        get("/records/zone-hint?driverName=Ana+Mar%C3%ADa&zone="),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("zone-field"));
    assert!(body.contains(r#"value="Sur""#));
    assert!(!body.contains("<html"));

    // Unknown names keep whatever was typed.
    let body = body_string(
        handle(get("/records/zone-hint?driverName=Nobody&zone=Centro"), &app).unwrap(),
    );
    assert!(body.contains(r#"value="Centro""#));
}

#[test]
fn editing_updates_in_place() {
    let app = test_app();
    handle(
        post_form("/records", "driverName=Ana&zone=Norte&systemPackages=1"),
        &app,
    )
    .unwrap();
    let id = app
        .with_ledger(|l| Ok(l.records().list()[0].id.clone()))
        .unwrap();

    let edit_page = body_string(handle(get(&format!("/?edit={id}")), &app).unwrap());
    assert!(edit_page.contains("Edit record"));

    handle(
        post_form(
            "/records",
            &format!("id={id}&driverName=Ana&zone=Norte&systemPackages=9&isSubstitute=on"),
        ),
        &app,
    )
    .unwrap();

    let records = app.with_ledger(|l| Ok(l.records().list().to_vec())).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].system_packages, 9);
    assert!(records[0].is_substitute);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Record updated."));
}

#[test]
fn rejected_edit_returns_to_its_form() {
    let app = test_app();
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();
    let id = app
        .with_ledger(|l| Ok(l.records().list()[0].id.clone()))
        .unwrap();

    let resp = handle(
        post_form("/records", &format!("id={id}&driverName=&zone=Norte")),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), format!("/?edit={id}"));
}

#[test]
fn deleting_a_record_removes_it() {
    let app = test_app();
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();
    let id = app
        .with_ledger(|l| Ok(l.records().list()[0].id.clone()))
        .unwrap();

    let resp = handle(post_form(&format!("/records/{id}/delete"), ""), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(app.with_ledger(|l| Ok(l.records().is_empty())).unwrap());

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Record deleted."));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app();

    assert!(matches!(
        handle(get("/nowhere"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(post_form("/records/abc/archive", ""), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/records"), &app),
        Err(ServerError::NotFound)
    ));
}
