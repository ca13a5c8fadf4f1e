use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScrapeError {
    Network(String),
    HtmlParse(String),
    Db(String),
    Io(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Network(msg) => write!(f, "Network error: {msg}"),
            ScrapeError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScrapeError::Db(msg) => write!(f, "Database error: {msg}"),
            ScrapeError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl Error for ScrapeError {}
