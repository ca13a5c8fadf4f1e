// src/tests/router_tests/dashboard_tests.rs

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

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn dashboard_loads_with_empty_database() {
    let db = init_test_db("dashboard_empty");

    let resp = handle(get("/"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Karachi Property Dashboard"));
    assert!(body.contains("No listings match"));
}

#[test]
fn dashboard_shows_seeded_listings_and_aggregates() {
    let db = init_test_db("dashboard_seeded");
    seed_sample(&db);

    let resp = handle(get("/"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    // Three rows survive the cleaner; the N/A price row does not.
    assert!(body.contains("Listings (3)"));
    assert!(body.contains("DHA Phase 5"));
    assert!(body.contains("Clifton Block 2"));
    assert!(body.contains("PKR 2 Crore"));

    // Mean price of 20M + 8.5M + 0.9M = 9.8M -> "98.00 Lakh"
    assert!(body.contains("98.00 Lakh"));
}

#[test]
fn dashboard_shows_bedroom_charts_and_top_expensive() {
    let db = init_test_db("dashboard_analytics");
    seed_sample(&db);

    let resp = handle(get("/"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Listings by bedrooms"));
    assert!(body.contains("Mean price by bedrooms"));
    // Seeded counts are 4, 2 and 3 bedrooms.
    assert!(body.contains("4 Beds"));
    assert!(body.contains("2 Beds"));

    // Top-expensive table leads with the 2 Crore DHA listing.
    let most_expensive = body.find("Most expensive").expect("table missing");
    let dha = body[most_expensive..].find("DHA Phase 5");
    let clifton = body[most_expensive..].find("Clifton Block 2");
    assert!(dha.unwrap() < clifton.unwrap(), "rows not sorted by price");
}

#[test]
fn dashboard_filters_by_location_and_price_band() {
    let db = init_test_db("dashboard_filtered");
    seed_sample(&db);

    let resp = handle(
        get("/?location=Gulshan+Block+13&min_price=500000&max_price=1000000"),
        &db,
    )
    .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Listings (1)"));
    assert!(body.contains("PKR 900000"));
    assert!(!body.contains("PKR 2 Crore"));
    // The out-of-band DHA listing is still offered in the select box.
    assert!(body.contains("DHA Phase 5"));
}

#[test]
fn inverted_price_band_yields_empty_dashboard_not_error() {
    let db = init_test_db("dashboard_inverted");
    seed_sample(&db);

    let resp = handle(get("/?min_price=2000000&max_price=1000000"), &db)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Listings (0)"));
    assert!(body.contains("No listings match"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db("dashboard_404");

    let err = handle(get("/nope"), &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}
