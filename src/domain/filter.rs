// src/domain/filter.rs

use crate::domain::listing::NormalizedListing;
use std::collections::{BTreeMap, HashSet};

/// What the dashboard user asked for. An empty location set means
/// "any location"; the price bounds are inclusive on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub locations: HashSet<String>,
    pub price_min: f64,
    pub price_max: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            locations: HashSet::new(),
            price_min: 0.0,
            price_max: f64::INFINITY,
        }
    }
}

/// Scalar aggregates over the matching subset. Means are `None` when the
/// subset is empty — an empty result is a valid state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    pub count: usize,
    pub mean_price: Option<f64>,
    pub unique_locations: usize,
    pub mean_bedrooms: Option<f64>,
}

/// Per-location slice of the matching subset, for the dashboard charts.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBucket {
    pub location: String,
    pub count: usize,
    pub mean_price: f64,
}

/// Per-bedroom-count slice of the matching subset.
#[derive(Debug, Clone, PartialEq)]
pub struct BedroomBucket {
    pub bedrooms: u32,
    pub count: usize,
    pub mean_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub listings: Vec<NormalizedListing>,
    pub summary: FilterSummary,
    pub by_location: Vec<LocationBucket>,
    pub by_bedrooms: Vec<BedroomBucket>,
}

/// Compute the subset of `dataset` matching `criteria`, plus aggregates.
///
/// Pure and deterministic: the dataset is not touched, matching rows keep
/// their input order, and inverted bounds or unknown locations simply
/// produce an empty result. Invoked on every dashboard interaction, so it
/// takes the dataset as a parameter rather than reading any shared state.
pub fn filter_listings(dataset: &[NormalizedListing], criteria: &FilterCriteria) -> FilterResult {
    let listings: Vec<NormalizedListing> = dataset
        .iter()
        .filter(|l| {
            (criteria.locations.is_empty() || criteria.locations.contains(&l.location))
                && l.price_numeric >= criteria.price_min
                && l.price_numeric <= criteria.price_max
        })
        .cloned()
        .collect();

    let count = listings.len();
    let mean = |total: f64| if count == 0 { None } else { Some(total / count as f64) };

    let mean_price = mean(listings.iter().map(|l| l.price_numeric).sum());
    let mean_bedrooms = mean(listings.iter().map(|l| l.bedrooms as f64).sum());

    // BTreeMap so the buckets come out in a stable alphabetical order.
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for l in &listings {
        let entry = groups.entry(l.location.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += l.price_numeric;
    }
    let by_location = groups
        .into_iter()
        .map(|(location, (n, total))| LocationBucket {
            location: location.to_string(),
            count: n,
            mean_price: total / n as f64,
        })
        .collect();

    // Same grouping, keyed by bedroom count, ascending.
    let mut bed_groups: BTreeMap<u32, (usize, f64)> = BTreeMap::new();
    for l in &listings {
        let entry = bed_groups.entry(l.bedrooms).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += l.price_numeric;
    }
    let by_bedrooms = bed_groups
        .into_iter()
        .map(|(bedrooms, (n, total))| BedroomBucket {
            bedrooms,
            count: n,
            mean_price: total / n as f64,
        })
        .collect();

    let unique_locations = listings
        .iter()
        .map(|l| l.location.as_str())
        .collect::<HashSet<_>>()
        .len();

    FilterResult {
        listings,
        summary: FilterSummary {
            count,
            mean_price,
            unique_locations,
            mean_bedrooms,
        },
        by_location,
        by_bedrooms,
    }
}
