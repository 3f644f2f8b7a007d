//! Clinic Registration Page - doctors pin their clinic on the map

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::services::{api, maps};
use crate::state::draft::{RegistrationDraft, MSG_DOCTOR_SAVED, MSG_SAVE_FALLBACK};
use crate::utils::constants::{
    MAP_ZOOM_DEFAULT, MAP_ZOOM_REGISTER_MARKED, REGISTER_MAP_CENTER, REGISTER_MAP_ID,
};
use shared::dto::geo::Coordinate;
use shared::utils::format_coordinate;

#[component]
pub fn RegisterClinicPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (clinic_address, set_clinic_address) = signal(String::new());
    let (marker, set_marker) = signal(None::<Coordinate>);
    let (message, set_message) = signal(None::<String>);
    let (maps_ready, set_maps_ready) = signal(false);

    // Load the Maps script, then bind the map once its container is rendered
    leptos::task::spawn_local(async move {
        match maps::load_maps_api().await {
            Ok(()) => {
                set_maps_ready.set(true);
                // Let the container div render before binding the map to it
                gloo_timers::future::TimeoutFuture::new(0).await;
                let mounted = maps::mount_map(
                    REGISTER_MAP_ID,
                    REGISTER_MAP_CENTER,
                    MAP_ZOOM_DEFAULT,
                    move |clicked| {
                        set_marker.set(Some(clicked));
                        maps::place_marker(REGISTER_MAP_ID, clicked);
                        maps::recenter(REGISTER_MAP_ID, clicked, MAP_ZOOM_REGISTER_MARKED);
                    },
                );
                if let Err(e) = mounted {
                    log::error!("Failed to mount registration map: {}", e);
                }
            }
            Err(e) => log::error!("Google Maps failed to load: {}", e),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = RegistrationDraft {
            name: name.get(),
            clinic_address: clinic_address.get(),
            marker: marker.get(),
        };
        let request = match draft.validate() {
            Ok(request) => request,
            Err(msg) => {
                set_message.set(Some(msg.to_string()));
                return;
            }
        };

        leptos::task::spawn_local(async move {
            match api::save_doctor(&request).await {
                Ok(()) => {
                    log::info!("Doctor {} registered", request.name);
                    set_message.set(Some(MSG_DOCTOR_SAVED.to_string()));
                    set_name.set(String::new());
                    set_clinic_address.set(String::new());
                    set_marker.set(None);
                    maps::remove_marker(REGISTER_MAP_ID);
                    maps::recenter(REGISTER_MAP_ID, REGISTER_MAP_CENTER, MAP_ZOOM_DEFAULT);
                }
                Err(e) => set_message.set(Some(e.user_message(MSG_SAVE_FALLBACK))),
            }
        });
    };

    view! {
        <div class="screen">
            <h2>"Add Clinic Location"</h2>
            <form on:submit=on_submit>
                <div class="field-row">
                    <div class="field">
                        <label>"Name:"</label>
                        <input
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field field-wide">
                        <label>"Clinic Address:"</label>
                        <input
                            prop:value=clinic_address
                            on:input=move |ev| set_clinic_address.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="map-wrap">
                    {move || {
                        if maps_ready.get() {
                            view! { <div id=REGISTER_MAP_ID class="map"></div> }.into_any()
                        } else {
                            view! { <div class="map-loading">"Loading Map..."</div> }.into_any()
                        }
                    }}
                </div>
                {move || {
                    marker
                        .get()
                        .map(|m| {
                            view! {
                                <p class="picked-location">
                                    "Selected location: "
                                    {format_coordinate(m.latitude, m.longitude)}
                                </p>
                            }
                        })
                }}
                <button type="submit" class="btn">"Save Clinic"</button>
            </form>
            {move || {
                message
                    .get()
                    .map(|msg| view! { <p class="status-message status-message-info">{msg}</p> })
            }}
        </div>
    }
}
