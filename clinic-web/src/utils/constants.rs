//! Application constants

use shared::dto::geo::Coordinate;

pub const API_BASE: &str = "http://localhost:5000";

/// Google Maps API key, injected at build time (`GOOGLE_MAPS_API_KEY=... trunk build`)
pub const GOOGLE_MAPS_API_KEY: Option<&str> = option_env!("GOOGLE_MAPS_API_KEY");

/// Search radius sent as the `distance` query parameter. The unit is owned
/// by the backend (assumed meters); the client never interprets it.
pub const SEARCH_RADIUS: u32 = 5000;

// Default map centers per screen
pub const REGISTER_MAP_CENTER: Coordinate = Coordinate::new(12.9352, 77.6245); // Bangalore
pub const SEARCH_MAP_CENTER: Coordinate = Coordinate::new(18.520430, 73.856743); // Pune

// Zoom levels: wide by default, tight once a marker is placed
pub const MAP_ZOOM_DEFAULT: u8 = 12;
pub const MAP_ZOOM_REGISTER_MARKED: u8 = 16;
pub const MAP_ZOOM_SEARCH_MARKED: u8 = 15;

// DOM ids the map service binds to
pub const REGISTER_MAP_ID: &str = "register-map";
pub const SEARCH_MAP_ID: &str = "search-map";
pub const SEARCH_ADDRESS_INPUT_ID: &str = "search-address-input";
