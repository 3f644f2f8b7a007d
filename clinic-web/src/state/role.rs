//! Active-role state management

use leptos::prelude::*;

/// The two user roles the shell can render a screen for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }
}

/// Global role context
///
/// Only the active role is shared between screens; each screen owns the rest
/// of its state and recreates it on mount, so switching roles discards any
/// unsaved draft.
#[derive(Clone, Copy)]
pub struct RoleContext {
    pub role: RwSignal<Role>,
}

impl RoleContext {
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(Role::Doctor),
        }
    }

    pub fn is_active(&self, role: Role) -> bool {
        self.role.with(|current| *current == role)
    }

    pub fn switch_to(&self, role: Role) {
        self.role.set(role);
    }
}

pub fn provide_role_context() -> RoleContext {
    let context = RoleContext::new();
    provide_context(context);
    context
}

pub fn use_role_context() -> RoleContext {
    expect_context::<RoleContext>()
}
