// src/domain/listing.rs

/// A listing after cleaning: price resolved to a numeric value in PKR,
/// bedroom/bathroom counts pulled out of the features text.
///
/// Invariant: `price_numeric` is always a finite, non-negative number.
/// Raw listings whose price fails to normalize never become one of these.
#[derive(Debug, PartialEq, Clone)]
pub struct NormalizedListing {
    pub location: String,
    /// The price exactly as it appeared on the page, e.g. "PKR 1.5 Crore".
    pub price: String,
    /// Price in plain PKR.
    pub price_numeric: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
}
