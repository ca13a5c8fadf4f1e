pub mod filter;
pub mod listing;
pub mod normalize;

pub use filter::{filter_listings, FilterCriteria, FilterResult};
pub use listing::NormalizedListing;
pub use normalize::{clean, extract_count, normalize_price, Feature};
