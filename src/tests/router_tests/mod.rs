mod dashboard_tests;
mod export_tests;
mod scrapes_tests;
