pub mod dashboard;
pub mod scrapes;

pub use dashboard::{dashboard_page, DashboardVm};
pub use scrapes::{scrape_started_page, scrapes_page};
