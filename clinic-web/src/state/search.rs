//! Nearby-doctor search: query construction and screen state transitions

use crate::utils::constants::SEARCH_RADIUS;
use shared::dto::doctor::DoctorRecord;
use shared::dto::geo::Coordinate;

/// Shown when the user searches without picking a location first
pub const MSG_PICK_LOCATION: &str =
    "Please select a location on the map or search for an address.";
/// Shown when the backend returns an empty result set
pub const MSG_NO_DOCTORS: &str = "No doctors found nearby.";
/// Fallback when the server rejects the search without an error string
pub const MSG_SEARCH_FALLBACK: &str = "Error searching for doctors";

/// Separator between a result's name and clinic address
pub const RESULT_SEPARATOR: &str = " \u{2014} ";

/// A nearby-doctor query, constructed fresh per search submission.
///
/// The radius is always [`SEARCH_RADIUS`]; the backend interprets its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub center: Coordinate,
    pub radius: u32,
}

impl SearchQuery {
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            radius: SEARCH_RADIUS,
        }
    }

    /// Query string for `GET /api/doctors/search`, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        format!(
            "latitude={}&longitude={}&distance={}",
            self.center.latitude, self.center.longitude, self.radius
        )
    }
}

/// Screen state of the search page, minus the map marker (which the map
/// widget owns). The component drives it through [`begin`](Self::begin) and
/// [`resolve`](Self::resolve); `loading` is true exactly between the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub doctors: Vec<DoctorRecord>,
    pub message: Option<String>,
    pub loading: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search attempt.
    ///
    /// Without a picked coordinate this only sets the prompt message and
    /// returns `None`: no request may be issued and `loading` stays false.
    /// With one it raises `loading`, clears the message and hands back the
    /// query to send.
    pub fn begin(&mut self, marker: Option<Coordinate>) -> Option<SearchQuery> {
        let center = match marker {
            Some(center) => center,
            None => {
                self.message = Some(MSG_PICK_LOCATION.to_string());
                return None;
            }
        };
        self.loading = true;
        self.message = None;
        Some(SearchQuery::new(center))
    }

    /// Apply the outcome of an issued search.
    ///
    /// Success replaces the list (empty sets show [`MSG_NO_DOCTORS`]);
    /// failure shows the error and keeps the previous list. The loading
    /// flag clears on every path.
    pub fn resolve(&mut self, outcome: Result<Vec<DoctorRecord>, String>) {
        match outcome {
            Ok(results) => {
                if results.is_empty() {
                    self.message = Some(MSG_NO_DOCTORS.to_string());
                }
                self.doctors = results;
            }
            Err(message) => self.message = Some(message),
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, clinic_address: &str) -> DoctorRecord {
        DoctorRecord {
            id: id.to_string(),
            name: name.to_string(),
            clinic_address: clinic_address.to_string(),
        }
    }

    #[test]
    fn test_query_string_shape() {
        let query = SearchQuery::new(Coordinate::new(18.520430, 73.856743));
        assert_eq!(
            query.to_query_string(),
            "latitude=18.52043&longitude=73.856743&distance=5000"
        );
    }

    #[test]
    fn test_radius_is_fixed() {
        let query = SearchQuery::new(Coordinate::new(0.0, 0.0));
        assert_eq!(query.radius, SEARCH_RADIUS);
        assert!(query.to_query_string().ends_with("&distance=5000"));
    }

    #[test]
    fn test_begin_without_marker_issues_no_query() {
        let mut state = SearchState::new();
        assert!(state.begin(None).is_none());
        assert_eq!(state.message.as_deref(), Some(MSG_PICK_LOCATION));
        assert!(!state.loading);
    }

    #[test]
    fn test_begin_with_marker_raises_loading() {
        let mut state = SearchState::new();
        state.message = Some("stale".to_string());
        let query = state.begin(Some(Coordinate::new(18.5, 73.8))).unwrap();
        assert_eq!(query.center, Coordinate::new(18.5, 73.8));
        assert!(state.loading);
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_resolve_success_replaces_list_and_clears_loading() {
        let mut state = SearchState::new();
        state.begin(Some(Coordinate::new(18.5, 73.8)));
        state.resolve(Ok(vec![record("1", "Dr. X", "Addr")]));
        assert!(!state.loading);
        assert_eq!(state.message, None);
        assert_eq!(state.doctors.len(), 1);
        assert_eq!(state.doctors[0].name, "Dr. X");
    }

    #[test]
    fn test_resolve_empty_shows_message_and_clears_loading() {
        let mut state = SearchState::new();
        state.begin(Some(Coordinate::new(18.5, 73.8)));
        state.resolve(Ok(vec![]));
        assert!(!state.loading);
        assert_eq!(state.message.as_deref(), Some(MSG_NO_DOCTORS));
        assert!(state.doctors.is_empty());
    }

    #[test]
    fn test_resolve_error_keeps_list_and_clears_loading() {
        let mut state = SearchState::new();
        state.doctors = vec![record("1", "Dr. X", "Addr")];
        state.begin(Some(Coordinate::new(18.5, 73.8)));
        state.resolve(Err("Network error".to_string()));
        assert!(!state.loading);
        assert_eq!(state.message.as_deref(), Some("Network error"));
        assert_eq!(state.doctors.len(), 1);
    }

    #[test]
    fn test_loading_brackets_the_call_on_every_path() {
        let outcomes: Vec<Result<Vec<DoctorRecord>, String>> = vec![
            Ok(vec![record("1", "Dr. X", "Addr")]),
            Ok(vec![]),
            Err("Duplicate".to_string()),
            Err("Network error".to_string()),
        ];
        for outcome in outcomes {
            let mut state = SearchState::new();
            assert!(!state.loading);
            state.begin(Some(Coordinate::new(18.5, 73.8)));
            assert!(state.loading);
            state.resolve(outcome);
            assert!(!state.loading);
        }
    }

    #[test]
    fn test_result_separator_is_an_em_dash() {
        assert_eq!(RESULT_SEPARATOR, " — ");
    }
}
