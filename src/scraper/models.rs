use serde::{Deserialize, Serialize};

// listing card (li[role="article"])
//  ├── div.d870ae17          -> location (title attribute)
//  ├── span[aria-label=Price] -> price text, e.g. "PKR 1.5 Crore"
//  ├── div.e3fdfcd8          -> features text, e.g. "3 Bed2 Bath1,080 sqft"
//  └── span.a018d4bd         -> last updated text

/// One listing card as lifted off the page. Every field is optional
/// because the markup omits whatever the lister didn't fill in; nothing
/// is validated here — that's the cleaner's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub location: Option<String>,
    pub price: Option<String>,
    pub features: Option<String>,
    pub last_updated: Option<String>,
}
