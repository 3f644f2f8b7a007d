//! Doctors backend API client
//!
//! Two endpoints, JSON over HTTP, no authentication. Non-ok responses carry
//! an optional `{ "error": "..." }` body which is surfaced verbatim when
//! present; transport failures collapse into [`ApiError::Network`].

use gloo_net::http::{Request, Response};
use shared::dto::doctor::{DoctorRecord, ErrorResponse, NewDoctorRequest};

use crate::state::search::SearchQuery;
use crate::utils::constants::API_BASE;

/// Shown whenever the request itself failed (never reached a response)
pub const MSG_NETWORK_ERROR: &str = "Network error";

/// What went wrong with an API call, from the user's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP response received but not ok; carries the server's error string
    /// when the body could be decoded
    Server(Option<String>),
    /// The request threw or the response body was unreadable
    Network,
}

impl ApiError {
    /// Message to show the user; `fallback` covers server errors without a
    /// usable error string and differs per operation.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server(Some(error)) => error.clone(),
            ApiError::Server(None) => fallback.to_string(),
            ApiError::Network => MSG_NETWORK_ERROR.to_string(),
        }
    }
}

async fn server_error(response: Response) -> ApiError {
    let error = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.error);
    ApiError::Server(error)
}

/// `POST /api/doctors` — register a clinic. The success body is ignored.
pub async fn save_doctor(request: &NewDoctorRequest) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/doctors", API_BASE))
        .json(request)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|e| {
            log::warn!("save_doctor request failed: {:?}", e);
            ApiError::Network
        })?;

    if response.ok() {
        Ok(())
    } else {
        log::warn!("save_doctor rejected with status {}", response.status());
        Err(server_error(response).await)
    }
}

/// `GET /api/doctors/search` — doctors within the query's radius, in server order.
pub async fn search_doctors(query: &SearchQuery) -> Result<Vec<DoctorRecord>, ApiError> {
    let url = format!("{}/api/doctors/search?{}", API_BASE, query.to_query_string());
    let response = Request::get(&url).send().await.map_err(|e| {
        log::warn!("search_doctors request failed: {:?}", e);
        ApiError::Network
    })?;

    if response.ok() {
        response
            .json::<Vec<DoctorRecord>>()
            .await
            .map_err(|_| ApiError::Network)
    } else {
        log::warn!("search_doctors rejected with status {}", response.status());
        Err(server_error(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_string_is_surfaced_verbatim() {
        let error = ApiError::Server(Some("Duplicate".to_string()));
        assert_eq!(error.user_message("Error saving doctor"), "Duplicate");
    }

    #[test]
    fn test_server_error_without_body_uses_fallback() {
        let error = ApiError::Server(None);
        assert_eq!(
            error.user_message("Error searching for doctors"),
            "Error searching for doctors"
        );
    }

    #[test]
    fn test_network_error_message() {
        assert_eq!(ApiError::Network.user_message("unused"), MSG_NETWORK_ERROR);
    }
}
