// src/tests/router_tests/export_tests.rs

use crate::router::handle;
use crate::tests::utils::{init_test_db, seed_sample};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn export_returns_xlsx_attachment() {
    let db = init_test_db("export_basic");
    seed_sample(&db);

    let resp = handle(get("/export"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("zameen_karachi_listings.xlsx"));

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();

    // XLSX files are zip archives.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_respects_filter_criteria() {
    let db = init_test_db("export_filtered");
    seed_sample(&db);

    // A band nothing falls into still exports a valid (empty) workbook.
    let resp = handle(get("/export?min_price=1&max_price=2"), &db)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
