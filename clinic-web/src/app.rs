//! Nearby Doctors App Shell
//!
//! Holds the active role and renders one of the two screens. Nothing else is
//! shared between them; a screen's state lives and dies with its mount.

use leptos::prelude::*;

use crate::components::RoleSwitch;
use crate::pages::{RegisterClinicPage, SearchPage};
use crate::state::role::{provide_role_context, Role};

#[component]
pub fn App() -> impl IntoView {
    let role_ctx = provide_role_context();

    view! {
        <div class="app-container">
            <RoleSwitch/>
            {move || match role_ctx.role.get() {
                Role::Doctor => view! { <RegisterClinicPage/> }.into_any(),
                Role::Patient => view! { <SearchPage/> }.into_any(),
            }}
        </div>
    }
}
