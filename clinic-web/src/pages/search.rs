//! Doctor Search Page - patients find doctors near a chosen point

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::services::{api, maps};
use crate::state::search::{SearchState, MSG_SEARCH_FALLBACK, RESULT_SEPARATOR};
use crate::utils::constants::{
    MAP_ZOOM_DEFAULT, MAP_ZOOM_SEARCH_MARKED, SEARCH_ADDRESS_INPUT_ID, SEARCH_MAP_CENTER,
    SEARCH_MAP_ID,
};
use shared::dto::geo::Coordinate;

#[component]
pub fn SearchPage() -> impl IntoView {
    let (marker, set_marker) = signal(None::<Coordinate>);
    let search_state = RwSignal::new(SearchState::new());
    let (maps_ready, set_maps_ready) = signal(false);

    // Load the Maps script, then bind the map and the address autocomplete
    leptos::task::spawn_local(async move {
        match maps::load_maps_api().await {
            Ok(()) => {
                set_maps_ready.set(true);
                // Let the container div and the input render first
                gloo_timers::future::TimeoutFuture::new(0).await;

                let pick = move |picked: Coordinate| {
                    set_marker.set(Some(picked));
                    maps::place_marker(SEARCH_MAP_ID, picked);
                    maps::recenter(SEARCH_MAP_ID, picked, MAP_ZOOM_SEARCH_MARKED);
                };

                let mounted = maps::mount_map(
                    SEARCH_MAP_ID,
                    SEARCH_MAP_CENTER,
                    MAP_ZOOM_DEFAULT,
                    pick,
                );
                if let Err(e) = mounted {
                    log::error!("Failed to mount search map: {}", e);
                }

                let autocomplete = maps::mount_autocomplete(SEARCH_ADDRESS_INPUT_ID, move |place| {
                    if !place.address.is_empty() {
                        log::info!("Autocomplete selected: {}", place.address);
                    }
                    pick(place.coordinate());
                });
                if let Err(e) = autocomplete {
                    log::error!("Failed to mount address autocomplete: {}", e);
                }
            }
            Err(e) => log::error!("Google Maps failed to load: {}", e),
        }
    });

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = search_state
            .try_update(|state| state.begin(marker.get()))
            .flatten();
        let query = match query {
            Some(query) => query,
            // Precondition failed; the prompt message is already set
            None => return,
        };

        leptos::task::spawn_local(async move {
            let outcome = match api::search_doctors(&query).await {
                Ok(results) => {
                    log::info!("Search returned {} doctors", results.len());
                    Ok(results)
                }
                Err(e) => Err(e.user_message(MSG_SEARCH_FALLBACK)),
            };
            search_state.update(|state| state.resolve(outcome));
        });
    };

    view! {
        <div class="screen">
            <h2>"Find Doctors Near You"</h2>
            <form on:submit=on_search>
                {move || {
                    maps_ready
                        .get()
                        .then(|| {
                            view! {
                                <div class="field field-wide">
                                    <input
                                        type="text"
                                        id=SEARCH_ADDRESS_INPUT_ID
                                        placeholder="Type an address or area..."
                                    />
                                </div>
                            }
                        })
                }}
                <div class="map-wrap">
                    {move || {
                        if maps_ready.get() {
                            view! { <div id=SEARCH_MAP_ID class="map"></div> }.into_any()
                        } else {
                            view! { <div class="map-loading">"Loading Map..."</div> }.into_any()
                        }
                    }}
                </div>
                <button
                    type="submit"
                    class="btn"
                    prop:disabled=move || search_state.with(|state| state.loading)
                >
                    {move || {
                        if search_state.with(|state| state.loading) {
                            "Searching..."
                        } else {
                            "Search Doctors"
                        }
                    }}
                </button>
            </form>
            {move || {
                search_state
                    .with(|state| state.message.clone())
                    .map(|msg| {
                        view! { <p class="status-message status-message-error">{msg}</p> }
                    })
            }}
            {move || {
                let results = search_state.with(|state| state.doctors.clone());
                (!results.is_empty())
                    .then(|| {
                        view! {
                            <div class="results">
                                <h3>"Nearby Doctors:"</h3>
                                <ul>
                                    {results
                                        .into_iter()
                                        .map(|doc| {
                                            view! {
                                                <li class="result-card">
                                                    <strong>{doc.name}</strong>
                                                    {RESULT_SEPARATOR}
                                                    {doc.clinic_address}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
