//! Screens

pub mod register;
pub mod search;

pub use register::RegisterClinicPage;
pub use search::SearchPage;
