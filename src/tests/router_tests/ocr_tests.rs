// src/tests/router_tests/ocr_tests.rs

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::handlers::ocr::NOT_CONFIGURED;
use crate::ocr::tests::StubExtractor;
use crate::ocr::TextExtractor;
use crate::router::handle;
use crate::tests::utils::{body_string, post_raw, test_app, test_app_with};

#[test]
fn without_a_key_a_message_is_returned() {
    let app = test_app();

    let resp = handle(post_raw("/ocr", "image/png", b"\x89PNG".to_vec()), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), NOT_CONFIGURED);
}

#[test]
fn extracted_text_is_returned() {
    let stub = Arc::new(StubExtractor::ok("Ana Norte 12"));
    let extractor: Box<dyn TextExtractor> = Box::new(stub.clone());
    let app = test_app_with(Some(extractor));

    let resp = handle(post_raw("/ocr", "image/jpeg", b"\xff\xd8".to_vec()), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "Ana Norte 12");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn non_images_get_a_message_without_a_call() {
    let stub = Arc::new(StubExtractor::ok("unused"));
    let extractor: Box<dyn TextExtractor> = Box::new(stub.clone());
    let app = test_app_with(Some(extractor));

    let resp = handle(post_raw("/ocr", "text/plain", b"hello".to_vec()), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).starts_with("Could not process the image"));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn extractor_failures_are_reported_as_text() {
    let stub = Arc::new(StubExtractor::failing("quota exhausted"));
    let extractor: Box<dyn TextExtractor> = Box::new(stub);
    let app = test_app_with(Some(extractor));

    let resp = handle(post_raw("/ocr", "image/png", b"\x89PNG".to_vec()), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("quota exhausted"));
}
