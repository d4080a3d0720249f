// src/tests/router_tests/drivers_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, test_app};

#[test]
fn drivers_page_loads_empty() {
    let app = test_app();

    let resp = handle(get("/drivers"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No titular drivers registered."));
}

#[test]
fn adding_editing_and_deleting_a_driver() {
    let app = test_app();

    let resp = handle(post_form("/drivers", "name=Ana&zone=Norte"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/drivers");

    let id = app
        .with_ledger(|l| Ok(l.drivers().list()[0].id.clone()))
        .unwrap();
    let body = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(body.contains("Driver added."));
    assert!(body.contains("Norte"));

    let edit = body_string(handle(get(&format!("/drivers?edit={id}")), &app).unwrap());
    assert!(edit.contains(&format!(r#"value="{id}""#)));

    handle(
        post_form("/drivers", &format!("id={id}&name=Ana&zone=Sur")),
        &app,
    )
    .unwrap();
    let drivers = app.with_ledger(|l| Ok(l.drivers().list().to_vec())).unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].zone, "Sur");

    handle(post_form(&format!("/drivers/{id}/delete"), ""), &app).unwrap();
    assert!(app.with_ledger(|l| Ok(l.drivers().list().is_empty())).unwrap());
    let body = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(body.contains("Driver deleted."));
}

#[test]
fn driver_without_name_is_refused() {
    let app = test_app();

    handle(post_form("/drivers", "name=++&zone=Norte"), &app).unwrap();

    assert!(app.with_ledger(|l| Ok(l.drivers().list().is_empty())).unwrap());
    let body = body_string(handle(get("/drivers"), &app).unwrap());
    assert!(body.contains("Could not save the driver: name is required."));
}

#[test]
fn deleting_a_driver_keeps_records() {
    let app = test_app();
    handle(post_form("/drivers", "name=Ana&zone=Norte"), &app).unwrap();
    handle(post_form("/records", "driverName=Ana&zone="), &app).unwrap();
    let id = app
        .with_ledger(|l| Ok(l.drivers().list()[0].id.clone()))
        .unwrap();

    handle(post_form(&format!("/drivers/{id}/delete"), ""), &app).unwrap();

    let zone = app
        .with_ledger(|l| Ok(l.records().list()[0].zone.clone()))
        .unwrap();
    assert_eq!(zone, "Norte");
}

#[test]
fn drivers_can_be_managed_while_history_is_shown() {
    let app = test_app();
    handle(post_form("/records", "driverName=Ana&zone=Norte"), &app).unwrap();
    handle(post_form("/worksheets/archive", ""), &app).unwrap();
    let ws_id = app
        .with_ledger(|l| Ok(l.worksheets()[0].id.clone()))
        .unwrap();
    handle(post_form("/view", &format!("view={ws_id}")), &app).unwrap();

    handle(post_form("/drivers", "name=Luis&zone=Sur"), &app).unwrap();

    assert_eq!(app.with_ledger(|l| Ok(l.drivers().list().len())).unwrap(), 1);
}
