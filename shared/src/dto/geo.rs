use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying a point on the map.
///
/// Produced by a map click or an address-autocomplete selection. Values are
/// passed through to the backend as-is; no range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_json_fields() {
        let json = serde_json::to_string(&Coordinate::new(12.9, 77.6)).unwrap();
        assert_eq!(json, r#"{"latitude":12.9,"longitude":77.6}"#);
    }
}
