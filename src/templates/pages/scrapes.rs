// templates/pages/scrapes.rs

use crate::db::scrapes::ScrapeRun;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Shown right after POST /scrape kicks off a background run.
pub fn scrape_started_page() -> Markup {
    desktop_layout(
        "Scrape Started",
        html! {
            main class="container" {
                h1 { "Scrape started" }
                p { "Fetching listings from Zameen.com in the background." }
                p {
                    a href="/scrapes" { "Watch progress" }
                    " or "
                    a href="/" { "go back to the dashboard" }
                    "."
                }
            }
        },
    )
}

pub fn scrapes_page(runs: &[ScrapeRun]) -> Markup {
    desktop_layout(
        "Scrape Runs",
        html! {
            main class="container" {
                h1 { "Scrape Runs" }

                @if runs.is_empty() {
                    p { "No scrape runs yet. Trigger one from the dashboard." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "ID" }
                                th { "Area" }
                                th { "Pages" }
                                th { "Seen" }
                                th { "Kept" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            @for run in runs {
                                tr {
                                    td { (run.id) }
                                    td { (run.area) }
                                    td class="num" { (run.pages_fetched.unwrap_or(0)) }
                                    td class="num" { (run.listings_seen.unwrap_or(0)) }
                                    td class="num" { (run.listings_kept.unwrap_or(0)) }
                                    td {
                                        // success is seeded 0 at start; an unfinished
                                        // run is only recognizable by finished_at.
                                        @if run.finished_at.is_none() {
                                            span { "running…" }
                                        } @else if run.success == Some(true) {
                                            span class="ok" { "✅ done" }
                                        } @else {
                                            span class="err" { "❌ " (run.error_message.as_deref().unwrap_or("failed")) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
