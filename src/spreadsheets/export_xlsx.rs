use crate::domain::listing::NormalizedListing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

pub fn export_listings_xlsx(listings: &[NormalizedListing]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = ["Location", "Price", "Price (PKR)", "Bedrooms", "Bathrooms"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.location)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.price_numeric)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write numeric price: {}", e)))?;

        worksheet
            .write_number(r, 3, listing.bedrooms as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bedrooms: {}", e)))?;

        worksheet
            .write_number(r, 4, listing.bathrooms as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bathrooms: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "zameen_karachi_listings.xlsx")
}
