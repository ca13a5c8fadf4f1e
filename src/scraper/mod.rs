pub mod models;
mod scrape_error;
mod scraper;

pub use self::scrape_error::ScrapeError;
pub use self::scraper::{ZameenScraper, DEFAULT_PAGES, SCRAPE_AREA};
