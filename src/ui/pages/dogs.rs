use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::{DogCard, Route, BUTTON_STYLE, PRIMARY_BUTTON_STYLE};
use crate::domain::entities::category::Category;
use crate::domain::entities::dog::{DogId, SortOrder};
use crate::domain::entities::filter::parse_age_bound;
use crate::domain::errors::ListingError;
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::ports::adoption_api::ApiError;
use crate::usecase::services::listing_controller::{fetch_listing_page, RefreshOutcome};

/// Issues a search for the current filters and applies the result unless a
/// newer search was started in the meantime.
fn refresh_listing(mut state: AppState, nav: Navigator, mut inline_error: Signal<Option<String>>) {
    let begun = state.listing.write().begin_refresh();
    let request = match begun {
        Ok(request) => request,
        Err(err) => {
            inline_error.set(Some(err.to_string()));
            return;
        }
    };
    inline_error.set(None);

    let api = consume_context::<Services>().api;
    spawn(async move {
        let result = fetch_listing_page(api.as_ref(), &request.params).await;
        let outcome = state.listing.write().finish_refresh(request.generation, result);
        if let RefreshOutcome::Failed(err) = outcome {
            if err.is_unauthorized() {
                state.end_session();
                nav.replace(Route::Login {});
            } else {
                state.error("Error", "Failed to load dogs. Please try again.");
            }
        }
    });
}

fn load_breeds(mut state: AppState, nav: Navigator) {
    if state.has_breeds() {
        return;
    }
    let dogs = consume_context::<Services>().dogs;
    spawn(async move {
        match dogs.breed_catalog().await {
            Ok(catalog) => state.breeds.set(Some(catalog)),
            Err(ApiError::Unauthorized) => {
                state.end_session();
                nav.replace(Route::Login {});
            }
            Err(_) => state.error("Error", "Failed to fetch breeds."),
        }
    });
}

#[component]
pub fn Dogs() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let nav = navigator();
    let inline_error = use_signal(|| None::<String>);

    use_hook(move || {
        load_breeds(state, nav);
        refresh_listing(state, nav, inline_error);
    });

    let featured_breed = use_memo(move || {
        state
            .breeds
            .read()
            .as_ref()
            .and_then(|catalog| catalog.featured(&mut rand::thread_rng()).map(str::to_string))
    });

    let listing = state.listing.read();
    let dogs = listing.current_dogs().to_vec();
    let favorites: Vec<DogId> = listing.favorites().iter().cloned().collect();
    let favorite_count = favorites.len();
    let is_loading = listing.is_loading();
    let current_page = listing.current_page();
    let total_pages = listing.total_pages();
    let can_advance = listing.can_advance();
    let can_retreat = listing.can_retreat();
    let sort_label = match listing.filters().sort_order() {
        SortOrder::Asc => "Breed A-Z",
        SortOrder::Desc => "Breed Z-A",
    };
    drop(listing);

    let grid_opacity = if is_loading { "0.6" } else { "1" };
    let categories: Vec<(String, &'static str, &'static str)> = Category::ALL
        .into_iter()
        .map(|category| (category.slug().to_string(), category.title(), category.accent()))
        .collect();

    let matches = services.matches.clone();
    let session = services.session.clone();

    rsx! {
        div { style: "display: flex;",
            FilterSidebar { inline_error }

            main { style: "flex: 1; padding: 16px 24px;",
                header {
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; flex-wrap: wrap; padding-bottom: 12px; border-bottom: 1px solid #ccfbf1;",
                    h1 { style: "margin: 0; color: #115e59;", "🐾 Pawfect Match" }
                    div { style: "display: flex; gap: 8px; align-items: center;",
                        button {
                            style: BUTTON_STYLE,
                            onclick: move |_| {
                                if state.listing.write().toggle_sort_order() {
                                    refresh_listing(state, nav, inline_error);
                                }
                            },
                            "⇅ {sort_label}"
                        }
                        if favorite_count > 0 {
                            button {
                                style: PRIMARY_BUTTON_STYLE,
                                onclick: move |_| {
                                    let favorites = state.listing.read().favorites().clone();
                                    let matches = matches.clone();
                                    spawn(async move {
                                        let mut rng = rand::thread_rng();
                                        match matches.find_match(&favorites, &mut rng).await {
                                            Ok(id) => {
                                                nav.push(Route::Matched { id: id.to_string() });
                                            }
                                            Err(ListingError::EmptyFavorites) => {
                                                state.error(
                                                    "No favorites selected",
                                                    "Please select at least one dog to find a match.",
                                                );
                                            }
                                            Err(ListingError::Unauthorized) => {
                                                state.end_session();
                                                nav.replace(Route::Login {});
                                            }
                                            Err(_) => {
                                                state.error("Error", "Failed to find a match. Please try again.");
                                            }
                                        }
                                    });
                                },
                                "♥ Match ({favorite_count})"
                            }
                        }
                        button {
                            style: BUTTON_STYLE,
                            onclick: move |_| {
                                let session = session.clone();
                                spawn(async move {
                                    match session.logout().await {
                                        Ok(()) => {
                                            state.end_session();
                                            nav.replace(Route::Login {});
                                        }
                                        Err(_) => state.error("Error", "Failed to logout. Please try again."),
                                    }
                                });
                            },
                            "Log out"
                        }
                    }
                }

                if let Some(breed) = featured_breed() {
                    div {
                        style: "margin: 16px 0; padding: 16px; border-radius: 12px; background: linear-gradient(90deg, #14b8a6, #0d9488); color: #fff;",
                        h2 { style: "margin: 0 0 4px;", "Featured breed: {breed}" }
                        button {
                            style: BUTTON_STYLE,
                            onclick: move |_| {
                                let name = breed.clone();
                                if state.listing.write().set_breeds(std::iter::once(name).collect()) {
                                    refresh_listing(state, nav, inline_error);
                                }
                            },
                            "Show me"
                        }
                    }
                }

                div { style: "display: flex; gap: 12px; margin: 12px 0;",
                    for (slug, title, accent) in categories {
                        span {
                            key: "{slug}",
                            style: "color: {accent};",
                            Link { to: Route::Explore { category: slug.clone() }, "{title}" }
                        }
                    }
                }

                if is_loading && dogs.is_empty() {
                    div { style: "display: flex; justify-content: center; padding: 64px;", "Loading..." }
                } else if dogs.is_empty() {
                    div { style: "display: flex; flex-direction: column; align-items: center; padding: 64px; background: #fff; border-radius: 12px;",
                        p { style: "color: #6b7280;", "No dogs found matching your criteria" }
                        button {
                            style: BUTTON_STYLE,
                            onclick: move |_| {
                                if state.listing.write().clear_filters() {
                                    refresh_listing(state, nav, inline_error);
                                }
                            },
                            "Clear filters"
                        }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px; opacity: {grid_opacity};",
                        for dog in dogs {
                            DogCard {
                                key: "{dog.id}",
                                is_favorite: favorites.contains(&dog.id),
                                on_toggle_favorite: {
                                    let id = dog.id.clone();
                                    move |_| {
                                        state.listing.write().toggle_favorite(&id);
                                    }
                                },
                                dog: dog.clone(),
                            }
                        }
                    }
                }

                div { style: "display: flex; justify-content: center; align-items: center; gap: 16px; margin: 24px 0;",
                    button {
                        style: BUTTON_STYLE,
                        disabled: !can_retreat || is_loading,
                        onclick: move |_| {
                            if state.listing.write().retreat() {
                                refresh_listing(state, nav, inline_error);
                            }
                        },
                        "Previous"
                    }
                    span { "Page {current_page} of {total_pages}" }
                    button {
                        style: BUTTON_STYLE,
                        disabled: !can_advance || is_loading,
                        onclick: move |_| {
                            if state.listing.write().advance() {
                                refresh_listing(state, nav, inline_error);
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn FilterSidebar(inline_error: Signal<Option<String>>) -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();

    let mut breed_query = use_signal(String::new);
    let mut search_text = use_signal(|| state.listing.read().filters().search_query().to_string());
    let mut age_min_text = use_signal(|| {
        state.listing.read().filters().age_min().map(|v| v.to_string()).unwrap_or_default()
    });
    let mut age_max_text = use_signal(|| {
        state.listing.read().filters().age_max().map(|v| v.to_string()).unwrap_or_default()
    });

    let suggestions: Vec<String> = state
        .breeds
        .read()
        .as_ref()
        .map(|catalog| {
            catalog
                .suggest(&breed_query())
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let selected: Vec<String> = state.listing.read().filters().breeds().iter().cloned().collect();
    let input_style = "width: 100%; box-sizing: border-box; padding: 6px 8px; border: 1px solid #99f6e4; border-radius: 6px;";

    rsx! {
        aside {
            style: "width: 280px; padding: 16px; border-right: 1px solid #ccfbf1; background: #fff; min-height: 100vh;",
            h3 { "Search" }
            form {
                onsubmit: move |event| {
                    event.prevent_default();
                    let text = search_text();
                    if state.listing.write().set_search_query(text.trim()) {
                        refresh_listing(state, nav, inline_error);
                    }
                },
                input {
                    style: input_style,
                    placeholder: "Search dogs",
                    value: search_text(),
                    oninput: move |event| search_text.set(event.value()),
                }
            }

            h3 { "Breeds" }
            input {
                style: input_style,
                placeholder: "Find a breed",
                value: breed_query(),
                oninput: move |event| breed_query.set(event.value()),
            }
            if !suggestions.is_empty() {
                div { style: "border: 1px solid #e5e7eb; border-radius: 6px; margin-top: 4px;",
                    for breed in suggestions {
                        div {
                            key: "{breed}",
                            style: "padding: 6px 8px; cursor: pointer;",
                            onclick: {
                                let breed = breed.clone();
                                move |_| {
                                    breed_query.set(String::new());
                                    if state.listing.write().toggle_breed(&breed) {
                                        refresh_listing(state, nav, inline_error);
                                    }
                                }
                            },
                            "{breed}"
                        }
                    }
                }
            }
            div { style: "display: flex; flex-wrap: wrap; gap: 6px; margin: 8px 0;",
                for breed in selected {
                    span {
                        key: "{breed}",
                        style: "background: #ccfbf1; color: #115e59; border-radius: 999px; padding: 2px 10px; cursor: pointer;",
                        onclick: {
                            let breed = breed.clone();
                            move |_| {
                                if state.listing.write().toggle_breed(&breed) {
                                    refresh_listing(state, nav, inline_error);
                                }
                            }
                        },
                        "{breed} ✕"
                    }
                }
            }

            h3 { "Age" }
            div { style: "display: flex; gap: 8px;",
                input {
                    style: input_style,
                    placeholder: "Min",
                    value: age_min_text(),
                    oninput: move |event| age_min_text.set(event.value()),
                }
                input {
                    style: input_style,
                    placeholder: "Max",
                    value: age_max_text(),
                    oninput: move |event| age_max_text.set(event.value()),
                }
            }
            if let Some(message) = inline_error() {
                p { style: "color: #dc2626;", "{message}" }
            }

            div { style: "display: flex; gap: 8px; margin-top: 16px;",
                button {
                    style: PRIMARY_BUTTON_STYLE,
                    onclick: move |_| {
                        let applied = parse_age_bound(&age_min_text())
                            .and_then(|min| parse_age_bound(&age_max_text()).map(|max| (min, max)))
                            .and_then(|(min, max)| state.listing.write().set_age_range(min, max));
                        match applied {
                            Ok(_) => refresh_listing(state, nav, inline_error),
                            Err(err) => inline_error.set(Some(err.to_string())),
                        }
                    },
                    "Apply filters"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        search_text.set(String::new());
                        age_min_text.set(String::new());
                        age_max_text.set(String::new());
                        if state.listing.write().clear_filters() {
                            refresh_listing(state, nav, inline_error);
                        }
                    },
                    "Clear"
                }
            }
        }
    }
}
