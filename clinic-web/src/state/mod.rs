//! Screen-local state and the shared role context

pub mod draft;
pub mod role;
pub mod search;
