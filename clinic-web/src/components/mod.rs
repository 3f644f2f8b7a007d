//! UI Components

pub mod role_switch;

pub use role_switch::RoleSwitch;
