use crate::db::listings::{distinct_locations, load_listings};
use crate::db::Database;
use crate::domain::filter::{filter_listings, FilterCriteria};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, ResultResp};
use crate::scraper::ZameenScraper;
use crate::spreadsheets::export_listings_xlsx;
use crate::templates;
use crate::templates::pages::DashboardVm;
use astra::Request;
use std::collections::HashSet;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let criteria = parse_criteria(&req);
            let dataset = load_listings(db)?;
            let vm = DashboardVm {
                result: filter_listings(&dataset, &criteria),
                all_locations: distinct_locations(db)?,
                criteria,
            };
            html_response(templates::pages::dashboard_page(&vm))
        }

        ("GET", "/export") => {
            let criteria = parse_criteria(&req);
            let dataset = load_listings(db)?;
            let result = filter_listings(&dataset, &criteria);
            export_listings_xlsx(&result.listings)
        }

        ("POST", "/scrape") => {
            let pages = query_pairs(&req)
                .into_iter()
                .find(|(k, _)| k == "pages")
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(crate::scraper::DEFAULT_PAGES);

            ZameenScraper::run_scrape(db, pages);
            html_response(templates::pages::scrape_started_page())
        }

        ("GET", "/scrapes") => {
            let runs = db.with_conn(|conn| crate::db::scrapes::recent_scrape_runs(conn))?;
            html_response(templates::pages::scrapes_page(&runs))
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

/// Decode the query string. Repeated keys are kept (the location select
/// submits one `location=` pair per selection).
fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}

/// Build FilterCriteria from the request. Absent or unparseable bounds fall
/// back to 0 / infinity; an empty location selection means "any location".
/// Inverted bounds are passed through as-is — the filter engine just
/// returns an empty result for them.
fn parse_criteria(req: &Request) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    let mut locations = HashSet::new();

    for (key, value) in query_pairs(req) {
        match key.as_str() {
            "location" if !value.is_empty() => {
                locations.insert(value);
            }
            "min_price" => {
                if let Ok(v) = value.parse::<f64>() {
                    criteria.price_min = v;
                }
            }
            "max_price" => {
                if let Ok(v) = value.parse::<f64>() {
                    criteria.price_max = v;
                }
            }
            _ => {}
        }
    }

    criteria.locations = locations;
    criteria
}
