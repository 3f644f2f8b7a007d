use serde::{Deserialize, Serialize};

/// Registration request body for `POST /api/doctors`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDoctorRequest {
    pub name: String,
    #[serde(rename = "clinicAddress")]
    pub clinic_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A single result from `GET /api/doctors/search`
///
/// The backend returns Mongo-style documents, hence the `_id` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "clinicAddress")]
    pub clinic_address: String,
}

/// Error response body used by both endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doctor_request_serializes_camel_case() {
        let request = NewDoctorRequest {
            name: "Dr. A".to_string(),
            clinic_address: "123 St".to_string(),
            latitude: 12.9,
            longitude: 77.6,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Dr. A");
        assert_eq!(json["clinicAddress"], "123 St");
        assert_eq!(json["latitude"], 12.9);
        assert_eq!(json["longitude"], 77.6);
        assert!(json.get("clinic_address").is_none());
    }

    #[test]
    fn test_doctor_record_decodes_mongo_id() {
        let record: DoctorRecord =
            serde_json::from_str(r#"{"_id":"1","name":"Dr. X","clinicAddress":"Addr"}"#).unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.name, "Dr. X");
        assert_eq!(record.clinic_address, "Addr");
    }

    #[test]
    fn test_doctor_records_keep_server_order() {
        let records: Vec<DoctorRecord> = serde_json::from_str(
            r#"[{"_id":"2","name":"Dr. B","clinicAddress":"B St"},
                {"_id":"1","name":"Dr. A","clinicAddress":"A St"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Dr. B");
        assert_eq!(records[1].name, "Dr. A");
    }

    #[test]
    fn test_error_response_decodes() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error":"Duplicate"}"#).unwrap();
        assert_eq!(err.error, "Duplicate");
    }
}
