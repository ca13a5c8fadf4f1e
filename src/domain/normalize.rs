// src/domain/normalize.rs

use crate::domain::listing::NormalizedListing;
use crate::scraper::models::RawListing;
use lazy_static::lazy_static;
use regex::Regex;

/// Zameen prefixes every price with this token.
const CURRENCY_PREFIX: &str = "PKR";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

lazy_static! {
    static ref BED_RE: Regex = Regex::new(r"(\d+)\s*Bed").unwrap();
    static ref BATH_RE: Regex = Regex::new(r"(\d+)\s*Bath").unwrap();
}

/// Convert a Zameen price string into plain PKR.
///
/// "PKR 1.5 Crore" -> 15_000_000, "PKR 50 Lakh" -> 5_000_000,
/// "PKR 900000" -> 900_000. The magnitude tokens are matched
/// case-sensitively, Crore before Lakh. Anything that doesn't resolve
/// to a finite, non-negative number is `None` — the caller drops the row.
pub fn normalize_price(price: Option<&str>) -> Option<f64> {
    let text = price?.replace(CURRENCY_PREFIX, "");
    let text = text.trim();

    let value = if text.contains("Crore") {
        parse_decimal(&text.replace("Crore", "")).map(|v| v * CRORE)
    } else if text.contains("Lakh") {
        parse_decimal(&text.replace("Lakh", "")).map(|v| v * LAKH)
    } else {
        parse_decimal(text)
    };

    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Which count to pull out of a features string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Bed,
    Bath,
}

/// Pull the first "<n> Bed" / "<n> Bath" count out of a features string
/// like "3 Bed2 Bath1,080 sqft". First match wins; `None` when the text
/// is missing or the label never appears (e.g. "Studio").
pub fn extract_count(features: Option<&str>, feature: Feature) -> Option<u32> {
    let text = features?;
    let re = match feature {
        Feature::Bed => &*BED_RE,
        Feature::Bath => &*BATH_RE,
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Normalize a batch of raw listings.
///
/// Rows whose price fails to normalize are dropped; that is the only drop
/// rule. Missing bedroom/bathroom counts become 0. Retained rows keep
/// their input order. Pure — persistence is the caller's business.
pub fn clean(raw: &[RawListing]) -> Vec<NormalizedListing> {
    raw.iter()
        .filter_map(|listing| {
            let price_numeric = normalize_price(listing.price.as_deref())?;
            Some(NormalizedListing {
                location: listing.location.clone().unwrap_or_default(),
                price: listing.price.clone().unwrap_or_default(),
                price_numeric,
                bedrooms: extract_count(listing.features.as_deref(), Feature::Bed).unwrap_or(0),
                bathrooms: extract_count(listing.features.as_deref(), Feature::Bath).unwrap_or(0),
            })
        })
        .collect()
}
