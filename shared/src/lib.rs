//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the web client and the doctors
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::geo`]**: Geographic primitives ([`dto::geo::Coordinate`])
//!   - **[`dto::doctor`]**: Doctor registration and search DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_coordinate`]**: Format a coordinate pair for display
//!
//! ## Wire Format
//!
//! The backend's JSON contract uses **camelCase** field names
//! (`clinicAddress`) and a Mongo-style `_id` on search results; DTOs map
//! those onto snake_case Rust fields with `#[serde(rename = ...)]`.
//! All structs implement both `Serialize` and `Deserialize`.
//!
//! ## Usage in the Frontend
//!
//! ```rust
//! use shared::dto::doctor::NewDoctorRequest;
//! use shared::dto::geo::Coordinate;
//!
//! let clicked = Coordinate::new(12.9352, 77.6245);
//! let request = NewDoctorRequest {
//!     name: "Dr. A".to_string(),
//!     clinic_address: "123 St".to_string(),
//!     latitude: clicked.latitude,
//!     longitude: clicked.longitude,
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("clinicAddress"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
