//! Role Switch Component - the doctor/patient toggle

use leptos::prelude::*;

use crate::state::role::{use_role_context, Role};

#[component]
pub fn RoleSwitch() -> impl IntoView {
    let role_ctx = use_role_context();

    view! {
        <div class="role-switch">
            <button
                on:click=move |_| role_ctx.switch_to(Role::Doctor)
                prop:disabled=move || role_ctx.is_active(Role::Doctor)
            >
                {Role::Doctor.label()}
            </button>
            <button
                style="margin-left: 8px;"
                on:click=move |_| role_ctx.switch_to(Role::Patient)
                prop:disabled=move || role_ctx.is_active(Role::Patient)
            >
                {Role::Patient.label()}
            </button>
        </div>
    }
}
