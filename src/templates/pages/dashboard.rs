// templates/pages/dashboard.rs

use crate::domain::filter::{FilterCriteria, FilterResult};
use crate::templates::{bar_chart, card, desktop_layout};
use maud::{html, Markup};

pub struct DashboardVm {
    pub criteria: FilterCriteria,
    /// Every location present in the dataset, for the select box.
    pub all_locations: Vec<String>,
    pub result: FilterResult,
}

/// Render a PKR amount the way Zameen would: Crore above 1e7, Lakh above
/// 1e5, plain rupees below that.
pub fn format_pkr(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("{:.2} Crore", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("{:.2} Lakh", amount / 100_000.0)
    } else {
        format!("{amount:.0}")
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Karachi Property Dashboard" }
                p { "Gulshan-e-Iqbal Town listings scraped from Zameen.com" }

                (filter_form(vm))
                (summary_cards(vm))
                (charts(vm))
                (top_expensive_table(vm))
                (listings_table(vm))
            }
        },
    )
}

fn filter_form(vm: &DashboardVm) -> Markup {
    let min = vm.criteria.price_min;
    let max = vm.criteria.price_max;

    html! {
        section class="card" {
            h3 { "Filters" }
            form action="/" method="get" class="filter-form" {
                label for="location" { "Locations" }
                select name="location" id="location" multiple size="6" {
                    @for loc in &vm.all_locations {
                        option value=(loc) selected[vm.criteria.locations.contains(loc)] { (loc) }
                    }
                }

                label for="min_price" { "Min price (PKR)" }
                input type="number" name="min_price" id="min_price" min="0" step="any"
                    value=[if min > 0.0 { Some(min) } else { None }];

                label for="max_price" { "Max price (PKR)" }
                input type="number" name="max_price" id="max_price" min="0" step="any"
                    value=[if max.is_finite() { Some(max) } else { None }];

                button type="submit" { "Apply" }
                button type="submit" formaction="/export" { "Download XLSX" }
            }

            form action="/scrape" method="post" class="scrape-form" {
                button type="submit" { "Scrape fresh data" }
            }
        }
    }
}

fn summary_cards(vm: &DashboardVm) -> Markup {
    let s = &vm.result.summary;

    html! {
        section class="summary-grid" {
            (card("Listings", html! { p class="big" { (s.count) } }))
            (card("Mean price", html! {
                @match s.mean_price {
                    Some(price) => p class="big" { "PKR " (format_pkr(price)) },
                    None => p class="big muted" { "—" },
                }
            }))
            (card("Locations", html! { p class="big" { (s.unique_locations) } }))
            (card("Mean bedrooms", html! {
                @match s.mean_bedrooms {
                    Some(beds) => p class="big" { (format!("{beds:.1}")) },
                    None => p class="big muted" { "—" },
                }
            }))
        }
    }
}

fn charts(vm: &DashboardVm) -> Markup {
    if vm.result.by_location.is_empty() {
        return html! {
            section class="card" {
                p { "No listings match the current filters." }
            }
        };
    }

    let counts: Vec<(String, f64, String)> = vm
        .result
        .by_location
        .iter()
        .map(|b| (b.location.clone(), b.count as f64, b.count.to_string()))
        .collect();

    let prices: Vec<(String, f64, String)> = vm
        .result
        .by_location
        .iter()
        .map(|b| {
            (
                b.location.clone(),
                b.mean_price,
                format!("PKR {}", format_pkr(b.mean_price)),
            )
        })
        .collect();

    let bed_label = |n: u32| if n == 1 { "1 Bed".to_string() } else { format!("{n} Beds") };

    let bed_counts: Vec<(String, f64, String)> = vm
        .result
        .by_bedrooms
        .iter()
        .map(|b| (bed_label(b.bedrooms), b.count as f64, b.count.to_string()))
        .collect();

    let bed_prices: Vec<(String, f64, String)> = vm
        .result
        .by_bedrooms
        .iter()
        .map(|b| {
            (
                bed_label(b.bedrooms),
                b.mean_price,
                format!("PKR {}", format_pkr(b.mean_price)),
            )
        })
        .collect();

    html! {
        section class="charts" {
            (card("Listings by location", bar_chart(&counts)))
            (card("Mean price by location", bar_chart(&prices)))
            (card("Listings by bedrooms", bar_chart(&bed_counts)))
            (card("Mean price by bedrooms", bar_chart(&bed_prices)))
        }
    }
}

/// Top 10 priciest listings in the current selection.
fn top_expensive_table(vm: &DashboardVm) -> Markup {
    let mut top: Vec<_> = vm.result.listings.iter().collect();
    top.sort_by(|a, b| {
        b.price_numeric
            .partial_cmp(&a.price_numeric)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top.truncate(10);

    if top.is_empty() {
        return html! {};
    }

    html! {
        section class="card" {
            h3 { "Most expensive" }
            table {
                thead {
                    tr {
                        th { "Location" }
                        th { "Price" }
                        th { "Beds" }
                        th { "Baths" }
                    }
                }
                tbody {
                    @for l in &top {
                        tr {
                            td { (l.location) }
                            td { (l.price) }
                            td class="num" { (l.bedrooms) }
                            td class="num" { (l.bathrooms) }
                        }
                    }
                }
            }
        }
    }
}

fn listings_table(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" {
            h3 { "Listings (" (vm.result.summary.count) ")" }
            table {
                thead {
                    tr {
                        th { "Location" }
                        th { "Price" }
                        th { "Price (PKR)" }
                        th { "Beds" }
                        th { "Baths" }
                    }
                }
                tbody {
                    @for l in &vm.result.listings {
                        tr {
                            td { (l.location) }
                            td { (l.price) }
                            td class="num" { (format!("{:.0}", l.price_numeric)) }
                            td class="num" { (l.bedrooms) }
                            td class="num" { (l.bathrooms) }
                        }
                    }
                }
            }
        }
    }
}
