//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the doctors backend over its REST API.
//!
//! ## Module Organization
//!
//! - [`geo`] - Geographic primitives (latitude/longitude pairs)
//! - [`doctor`] - Doctor registration and nearby-search DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: the backend expects camelCase (`clinicAddress`) and a
//!   Mongo-style `_id`; Rust fields stay snake_case and are renamed per field
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/doctors
//! Content-Type: application/json
//!
//! {
//!   "name": "Dr. A",
//!   "clinicAddress": "123 St",
//!   "latitude": 12.9352,
//!   "longitude": 77.6245
//! }
//! ```
//!
//! ```text
//! GET /api/doctors/search?latitude=18.52043&longitude=73.856743&distance=5000
//!
//! [
//!   { "_id": "1", "name": "Dr. X", "clinicAddress": "Addr" }
//! ]
//! ```

pub mod doctor;
pub mod geo;

pub use doctor::*;
pub use geo::*;
