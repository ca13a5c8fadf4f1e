// scraper.rs
use crate::db::connection::Database;
use crate::db::listings::save_listings;
use crate::domain::normalize::clean;
use crate::scraper::models::RawListing;
use crate::scraper::ScrapeError;
use rand::Rng;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Search URL for Gulshan-e-Iqbal Town, Karachi. `{page}` is 1-based.
const BASE_URL: &str = "https://www.zameen.com/Homes/Karachi_Gulshan_e_Iqbal_Town-6858";

pub const DEFAULT_PAGES: usize = 20;
pub const SCRAPE_AREA: &str = "Karachi_Gulshan_e_Iqbal_Town";

pub struct ZameenScraper {
    client: Client,
}

impl ZameenScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Kick off a scrape run on a background thread. Each page is fetched,
    /// parsed, cleaned and saved before the next one starts, so a run that
    /// dies partway still leaves complete pages behind. Run bookkeeping
    /// goes to `scrape_runs`.
    pub fn run_scrape(db: &Database, pages: usize) {
        let db = db.clone(); // cheap clone (path only)

        std::thread::spawn(move || {
            let now_start = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs() as i64;

            let run_id = db
                .with_conn(|conn| crate::db::scrapes::start_scrape_run(conn, SCRAPE_AREA, now_start))
                .unwrap_or(0);

            eprintln!("🧵 Scraper thread started for {SCRAPE_AREA} ({pages} pages)");

            let scraper = match ZameenScraper::new() {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Scraper init failed: {e}");
                    return;
                }
            };

            let mut pages_fetched = 0;
            let mut listings_seen = 0;
            let mut listings_kept = 0;

            let result = scraper.fetch_all_listings_paginated(pages, |raw| {
                listings_seen += raw.len();
                pages_fetched += 1;

                let normalized = clean(&raw);
                listings_kept += normalized.len();

                save_listings(&db, run_id, &normalized).map_err(|e| ScrapeError::Db(e.to_string()))
            });

            let now_end = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs() as i64;

            if let Err(e) = result {
                eprintln!("Scrape failed: {e}");
                let _ = db.with_conn(|conn| {
                    crate::db::scrapes::end_scrape_run(
                        conn,
                        run_id,
                        now_end,
                        pages_fetched,
                        listings_seen,
                        listings_kept,
                        false,
                        Some(e.to_string()),
                    )
                });
            } else {
                eprintln!("✅ Scrape complete ({listings_kept}/{listings_seen} listings kept)");
                let _ = db.with_conn(|conn| {
                    crate::db::scrapes::end_scrape_run(
                        conn,
                        run_id,
                        now_end,
                        pages_fetched,
                        listings_seen,
                        listings_kept,
                        true,
                        None,
                    )
                });
            }
        });
    }

    pub fn fetch_all_listings_paginated<F>(
        &self,
        pages: usize,
        on_page: F,
    ) -> Result<(), ScrapeError>
    where
        F: FnMut(Vec<RawListing>) -> Result<(), ScrapeError>,
    {
        paginate(
            pages,
            |page| {
                let page_url = format!("{BASE_URL}-{page}.html");
                eprintln!("📄 Scraping page {page}: {page_url}");
                self.fetch_listings(&page_url)
            },
            on_page,
        )
    }

    pub fn fetch_listings(&self, url: &str) -> Result<Vec<RawListing>, ScrapeError> {
        let html = self.fetch_html(url)?;

        #[cfg(debug_assertions)]
        {
            std::fs::write("zameen_debug.html", &html)
                .map_err(|e| ScrapeError::Io(e.to_string()))?;
        }

        let listings = Self::extract_listings(&html)?;

        #[cfg(debug_assertions)]
        save_raw_debug(&listings, "listings_debug.json")
            .map_err(|e| ScrapeError::Io(e.to_string()))?;

        Ok(listings)
    }

    /// Fetch one page with bounded retries, capped backoff and jitter.
    pub fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        const MAX_ATTEMPTS: u64 = 5;
        const MAX_BACKOFF_SECS: u64 = 10;
        const JITTER_MAX_SECS: u64 = 2;

        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let start = std::time::Instant::now();

            match self.try_fetch_html(url) {
                Ok(html) => {
                    eprintln!("✅ Fetch success attempt {attempt} in {:?}", start.elapsed());
                    return Ok(html);
                }
                Err(e) => {
                    eprintln!(
                        "⚠️ Fetch attempt {attempt} failed in {:?}: {e}",
                        start.elapsed()
                    );

                    last_err = Some(e);

                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ScrapeError::Network("retry loop failed".into())))
    }

    fn try_fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScrapeError::Network(format!("HTTP {status}: {url}")));
        }

        Ok(text)
    }

    /// Lift the listing cards out of a search results page. A card that is
    /// missing fields still yields a RawListing; the cleaner decides what
    /// to keep.
    pub fn extract_listings(html: &str) -> Result<Vec<RawListing>, ScrapeError> {
        let document = Html::parse_document(html);

        let card_sel = parse_selector(r#"li[role="article"]"#)?;
        let title_sel = parse_selector("div.d870ae17")?;
        let price_sel = parse_selector(r#"span[aria-label="Price"]"#)?;
        let features_sel = parse_selector("div.e3fdfcd8")?;
        let updated_sel = parse_selector("span.a018d4bd")?;

        let mut listings = Vec::new();

        for card in document.select(&card_sel) {
            let location = card
                .select(&title_sel)
                .next()
                .and_then(|el| el.value().attr("title"))
                .map(str::to_string);

            let price = card.select(&price_sel).next().map(element_text);
            let features = card.select(&features_sel).next().map(element_text);
            let last_updated = card.select(&updated_sel).next().map(element_text);

            listings.push(RawListing {
                location,
                price,
                features,
                last_updated,
            });
        }

        Ok(listings)
    }
}

/// Walk pages 1..=pages, handing each non-empty page to `on_page`. An empty
/// page ends the walk cleanly; three consecutive failed pages abort it with
/// an error so the run is recorded as failed, not done.
fn paginate<G, F>(pages: usize, mut fetch_page: G, mut on_page: F) -> Result<(), ScrapeError>
where
    G: FnMut(usize) -> Result<Vec<RawListing>, ScrapeError>,
    F: FnMut(Vec<RawListing>) -> Result<(), ScrapeError>,
{
    let mut consecutive_failures = 0;

    for page in 1..=pages {
        match fetch_page(page) {
            Ok(listings) => {
                if listings.is_empty() {
                    eprintln!("🏁 No listings on page {page}, stopping");
                    break;
                }

                eprintln!("✅ Page {page} parsed ({} listings)", listings.len());

                on_page(listings)?;

                consecutive_failures = 0;
                std::thread::sleep(Duration::from_secs(2));
            }

            Err(e) => {
                consecutive_failures += 1;
                eprintln!("⚠️ Page {page} failed (attempt {consecutive_failures}): {e}");

                if consecutive_failures >= 3 {
                    eprintln!("❌ Too many failures, aborting scrape");
                    return Err(ScrapeError::Network(format!(
                        "aborted after {consecutive_failures} consecutive page failures, last: {e}"
                    )));
                }

                std::thread::sleep(Duration::from_secs(2));
            }
        }
    }

    Ok(())
}

fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::HtmlParse(e.to_string()))
}

fn element_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(debug_assertions)]
fn save_raw_debug(listings: &[RawListing], filename: &str) -> std::io::Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(filename)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, listings)?;
    Ok(())
}
