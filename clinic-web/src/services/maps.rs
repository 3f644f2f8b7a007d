//! Google Maps Integration via wasm-bindgen
//!
//! JavaScript interop for the embedded map and the Places address
//! autocomplete. The Maps script is injected on demand, keyed by the API
//! credential from the build environment, and every capability is gated on
//! the loader's promise resolving.

use serde::Deserialize;
use shared::dto::geo::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// GOOGLE MAPS BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
let mapsReady = null;

export function loadMapsApi(apiKey) {
    if (window.google && window.google.maps && window.google.maps.places) {
        return Promise.resolve();
    }
    if (mapsReady) {
        return mapsReady;
    }
    mapsReady = new Promise((resolve, reject) => {
        const script = document.createElement('script');
        script.src = 'https://maps.googleapis.com/maps/api/js?key='
            + encodeURIComponent(apiKey) + '&libraries=places';
        script.async = true;
        script.onload = () => resolve();
        script.onerror = () => {
            mapsReady = null;
            reject(new Error('Failed to load the Google Maps script'));
        };
        document.head.appendChild(script);
    });
    return mapsReady;
}

// One map (plus at most one marker) per container element id
const maps = {};

export function initMap(elementId, lat, lng, zoom, onClick) {
    const el = document.getElementById(elementId);
    if (!el) {
        throw new Error('Map container #' + elementId + ' not found');
    }
    const map = new google.maps.Map(el, { center: { lat, lng }, zoom });
    map.addListener('click', (e) => onClick(e.latLng.lat(), e.latLng.lng()));
    maps[elementId] = { map, marker: null };
}

export function setMarker(elementId, lat, lng) {
    const entry = maps[elementId];
    if (!entry) {
        return;
    }
    const position = { lat, lng };
    if (entry.marker) {
        entry.marker.setPosition(position);
    } else {
        entry.marker = new google.maps.Marker({ map: entry.map, position });
    }
}

export function clearMarker(elementId) {
    const entry = maps[elementId];
    if (entry && entry.marker) {
        entry.marker.setMap(null);
        entry.marker = null;
    }
}

export function setCenter(elementId, lat, lng, zoom) {
    const entry = maps[elementId];
    if (!entry) {
        return;
    }
    entry.map.setCenter({ lat, lng });
    entry.map.setZoom(zoom);
}

export function initAutocomplete(inputId, onPlace) {
    const input = document.getElementById(inputId);
    if (!input) {
        throw new Error('Autocomplete input #' + inputId + ' not found');
    }
    const autocomplete = new google.maps.places.Autocomplete(input);
    autocomplete.addListener('place_changed', () => {
        const place = autocomplete.getPlace();
        // Selections without resolved geometry (e.g. raw text + Enter) are ignored
        if (place && place.geometry && place.geometry.location) {
            onPlace({
                lat: place.geometry.location.lat(),
                lng: place.geometry.location.lng(),
                address: place.formatted_address || ''
            });
        }
    });
}
")]
extern "C" {
    /// Inject the Maps script once and resolve when `google.maps` is usable
    #[wasm_bindgen(catch)]
    async fn loadMapsApi(api_key: &str) -> Result<JsValue, JsValue>;

    /// Create a map bound to a DOM element, with a click handler
    #[wasm_bindgen(catch)]
    fn initMap(
        element_id: &str,
        lat: f64,
        lng: f64,
        zoom: u8,
        on_click: &js_sys::Function,
    ) -> Result<(), JsValue>;

    /// Place or move the marker on a mounted map
    fn setMarker(element_id: &str, lat: f64, lng: f64);

    /// Remove the marker from a mounted map
    fn clearMarker(element_id: &str);

    /// Re-center and re-zoom a mounted map
    fn setCenter(element_id: &str, lat: f64, lng: f64, zoom: u8);

    /// Attach a Places autocomplete to a text input
    #[wasm_bindgen(catch)]
    fn initAutocomplete(input_id: &str, on_place: &js_sys::Function) -> Result<(), JsValue>;
}

// ============================================================================
// MAP SERVICE
// ============================================================================

/// A place chosen from the address autocomplete
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedPlace {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
}

impl SelectedPlace {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

fn js_error_message(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("Maps error: {:?}", error))
}

/// Load the Google Maps script keyed to the configured API credential.
///
/// Each screen calls this independently; the JS side deduplicates the load.
pub async fn load_maps_api() -> Result<(), String> {
    let api_key = crate::utils::constants::GOOGLE_MAPS_API_KEY
        .ok_or_else(|| "GOOGLE_MAPS_API_KEY was not set at build time".to_string())?;
    loadMapsApi(api_key)
        .await
        .map(|_| ())
        .map_err(js_error_message)
}

/// Mount an interactive map on the element with `element_id`.
///
/// The click handler is kept alive for the page's lifetime.
pub fn mount_map(
    element_id: &str,
    center: Coordinate,
    zoom: u8,
    mut on_click: impl FnMut(Coordinate) + 'static,
) -> Result<(), String> {
    let handler = Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lng: f64| {
        on_click(Coordinate::new(lat, lng));
    });
    let result = initMap(
        element_id,
        center.latitude,
        center.longitude,
        zoom,
        handler.as_ref().unchecked_ref(),
    );
    handler.forget();
    result.map_err(js_error_message)
}

/// Attach the Places autocomplete to the input with `input_id`.
pub fn mount_autocomplete(
    input_id: &str,
    mut on_place: impl FnMut(SelectedPlace) + 'static,
) -> Result<(), String> {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        match serde_wasm_bindgen::from_value::<SelectedPlace>(value) {
            Ok(place) => on_place(place),
            Err(e) => log::warn!("Ignoring malformed autocomplete selection: {}", e),
        }
    });
    let result = initAutocomplete(input_id, handler.as_ref().unchecked_ref());
    handler.forget();
    result.map_err(js_error_message)
}

pub fn place_marker(element_id: &str, coordinate: Coordinate) {
    setMarker(element_id, coordinate.latitude, coordinate.longitude);
}

pub fn remove_marker(element_id: &str) {
    clearMarker(element_id);
}

pub fn recenter(element_id: &str, coordinate: Coordinate, zoom: u8) {
    setCenter(element_id, coordinate.latitude, coordinate.longitude, zoom);
}
