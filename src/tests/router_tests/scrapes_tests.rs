// src/tests/router_tests/scrapes_tests.rs

use crate::db::scrapes::{end_scrape_run, start_scrape_run};
use crate::router::handle;
use crate::tests::utils::init_test_db;
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
fn scrapes_page_lists_recorded_runs() {
    let db = init_test_db("scrapes_page");

    db.with_conn(|conn| {
        let run_id = start_scrape_run(conn, "Karachi_Gulshan_e_Iqbal_Town", 1_700_000_000)?;
        end_scrape_run(
            conn,
            run_id,
            1_700_000_120,
            20,
            480,
            455,
            true,
            None,
        )
    })
    .expect("Failed to record run");

    let resp = handle(get("/scrapes"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains("Karachi_Gulshan_e_Iqbal_Town"));
    assert!(body.contains("455"));
    assert!(body.contains("done"));
}

#[test]
fn in_progress_run_shows_running_not_failed() {
    let db = init_test_db("scrapes_running");

    // Started but never finished: finished_at stays NULL, success stays 0.
    db.with_conn(|conn| {
        start_scrape_run(conn, "Karachi_Gulshan_e_Iqbal_Town", 1_700_000_000).map(|_| ())
    })
    .expect("Failed to record run");

    let resp = handle(get("/scrapes"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains("running"));
    assert!(!body.contains("failed"));
    assert!(!body.contains("done"));
}

#[test]
fn scrapes_page_is_empty_before_first_run() {
    let db = init_test_db("scrapes_empty");

    let resp = handle(get("/scrapes"), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert!(body.contains("No scrape runs yet"));
}

#[test]
fn failed_run_shows_error_message() {
    let db = init_test_db("scrapes_failed");

    db.with_conn(|conn| {
        let run_id = start_scrape_run(conn, "Karachi_Gulshan_e_Iqbal_Town", 1_700_000_000)?;
        end_scrape_run(
            conn,
            run_id,
            1_700_000_060,
            3,
            0,
            0,
            false,
            Some("Network error: timed out".to_string()),
        )
    })
    .expect("Failed to record run");

    let resp = handle(get("/scrapes"), &db).expect("Failed to handle request");

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert!(body.contains("Network error: timed out"));
}
