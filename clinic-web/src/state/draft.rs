//! Clinic registration draft and its submit precondition

use shared::dto::doctor::NewDoctorRequest;
use shared::dto::geo::Coordinate;

/// Shown when any required field or the map marker is missing
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill all fields and select a location on the map.";
/// Shown after a successful registration
pub const MSG_DOCTOR_SAVED: &str = "Doctor saved!";
/// Fallback when the server rejects the write without an error string
pub const MSG_SAVE_FALLBACK: &str = "Error saving doctor";

/// Transient, unsaved form state of the registration screen.
///
/// Cleared on successful submission; discarded when the user switches roles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub clinic_address: String,
    pub marker: Option<Coordinate>,
}

impl RegistrationDraft {
    /// Check the submit precondition and build the request body.
    ///
    /// Name and address must be non-empty after trimming and a marker must
    /// have been placed on the map. On failure no request is constructed and
    /// the caller shows the returned message instead of calling the backend.
    pub fn validate(&self) -> Result<NewDoctorRequest, &'static str> {
        let name = self.name.trim();
        let clinic_address = self.clinic_address.trim();
        let marker = match self.marker {
            Some(marker) if !name.is_empty() && !clinic_address.is_empty() => marker,
            _ => return Err(MSG_FILL_ALL_FIELDS),
        };
        Ok(NewDoctorRequest {
            name: name.to_string(),
            clinic_address: clinic_address.to_string(),
            latitude: marker.latitude,
            longitude: marker.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Dr. A".to_string(),
            clinic_address: "123 St".to_string(),
            marker: Some(Coordinate::new(12.9, 77.6)),
        }
    }

    #[test]
    fn test_complete_draft_builds_request() {
        let request = complete_draft().validate().unwrap();
        assert_eq!(request.name, "Dr. A");
        assert_eq!(request.clinic_address, "123 St");
        assert_eq!(request.latitude, 12.9);
        assert_eq!(request.longitude, 77.6);
    }

    #[test]
    fn test_empty_name_rejected() {
        let draft = RegistrationDraft {
            name: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_empty_address_rejected() {
        let draft = RegistrationDraft {
            clinic_address: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_missing_marker_rejected() {
        let draft = RegistrationDraft {
            marker: None,
            ..complete_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let draft = RegistrationDraft {
            name: "   ".to_string(),
            clinic_address: "\t".to_string(),
            ..complete_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_fields_are_trimmed_in_request() {
        let draft = RegistrationDraft {
            name: "  Dr. A  ".to_string(),
            ..complete_draft()
        };
        assert_eq!(draft.validate().unwrap().name, "Dr. A");
    }
}
