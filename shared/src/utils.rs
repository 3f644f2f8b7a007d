//! # Shared Utility Functions
//!
//! Common helpers used by the web client.
//!
//! ## Coordinate Formatting
//!
//! - [`format_coordinate`] - Format a latitude/longitude pair for display
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_coordinate;
//!
//! assert_eq!(format_coordinate(12.9352, 77.6245), "12.93520, 77.62450");
//! ```

/// Format a latitude/longitude pair with five decimal places.
///
/// Five decimals is roughly meter precision, which is plenty for showing the
/// user which point they picked on the map.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_coordinate;
///
/// assert_eq!(format_coordinate(18.520430, 73.856743), "18.52043, 73.85674");
/// assert_eq!(format_coordinate(-33.9, 151.2), "-33.90000, 151.20000");
/// ```
pub fn format_coordinate(latitude: f64, longitude: f64) -> String {
    format!("{:.5}, {:.5}", latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(12.9352, 77.6245), "12.93520, 77.62450");
        assert_eq!(format_coordinate(18.520430, 73.856743), "18.52043, 73.85674");
    }

    #[test]
    fn test_format_coordinate_negative() {
        assert_eq!(format_coordinate(-33.9, 151.2), "-33.90000, 151.20000");
    }

    #[test]
    fn test_format_coordinate_rounds() {
        assert_eq!(format_coordinate(0.123456789, 0.0), "0.12346, 0.00000");
    }
}
