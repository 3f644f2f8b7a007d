//! External collaborators: the doctors backend and the Google Maps widget

pub mod api;
pub mod maps;
