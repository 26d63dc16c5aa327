//! Key-prefix builders for the GOES ABI bucket layout.
//!
//! NOAA's public archives key products as
//! `{product}/{year}/{day_of_year}/{hour}/{filename}`, so listing with a
//! prefix built here narrows a scan to one product-hour.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Path builder for GOES imagery keys.
pub struct ImageryPath;

impl ImageryPath {
    /// Prefix covering every file of a product.
    /// Format: `{product}/`
    pub fn product(product: &str) -> String {
        format!("{}/", product)
    }

    /// Prefix covering one day of a product.
    /// Format: `{product}/{year}/{doy}/`
    pub fn product_day(product: &str, year: i32, day_of_year: u32) -> String {
        format!("{}/{}/{:03}/", product, year, day_of_year)
    }

    /// Prefix covering one hour of a product.
    /// Format: `{product}/{year}/{doy}/{hour}/`
    pub fn product_hour(product: &str, year: i32, day_of_year: u32, hour: u32) -> String {
        format!("{}/{}/{:03}/{:02}/", product, year, day_of_year, hour)
    }

    /// Prefix for the product-hour containing a UTC timestamp.
    pub fn product_at(product: &str, at: DateTime<Utc>) -> String {
        Self::product_hour(product, at.year(), at.ordinal(), at.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_imagery_paths() {
        assert_eq!(ImageryPath::product("ABI-L2-CMIPF"), "ABI-L2-CMIPF/");
        assert_eq!(
            ImageryPath::product_day("ABI-L2-CMIPF", 2024, 7),
            "ABI-L2-CMIPF/2024/007/"
        );
        assert_eq!(
            ImageryPath::product_hour("ABI-L1b-RadF", 2024, 366, 23),
            "ABI-L1b-RadF/2024/366/23/"
        );
    }

    #[test]
    fn test_product_at_uses_ordinal_day() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 5, 30, 0).unwrap();
        assert_eq!(
            ImageryPath::product_at("ABI-L2-CMIPF", at),
            "ABI-L2-CMIPF/2024/032/05/"
        );
    }
}
