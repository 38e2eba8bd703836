use dioxus::prelude::*;

use crate::app::{Route, BUTTON_STYLE};
use crate::domain::entities::dog::DogId;
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::ports::adoption_api::ApiError;

#[component]
pub fn Details(id: String) -> Element {
    rsx! {
        DogProfile { id, heading: String::new() }
    }
}

/// Single-dog view shared by the details and match pages. A blank id goes
/// back to the listing; an expired session goes back to login.
#[component]
pub fn DogProfile(id: String, heading: String) -> Element {
    let mut state = use_context::<AppState>();
    let dogs = use_context::<Services>().dogs;
    let nav = navigator();

    let lookup_id = id.clone();
    let dog = use_resource(move || {
        let dogs = dogs.clone();
        let id = lookup_id.clone();
        async move {
            if id.trim().is_empty() {
                return Ok(None);
            }
            dogs.fetch_dog(&DogId::from(id)).await
        }
    });

    let blank_id = id.trim().is_empty();
    use_effect(move || {
        if blank_id {
            nav.push(Route::Dogs {});
            return;
        }
        match &*dog.read() {
            Some(Err(ApiError::Unauthorized)) => {
                state.end_session();
                nav.replace(Route::Login {});
            }
            Some(Err(_)) => {
                state.error("Error", "Failed to fetch dog details. Please try again.");
                nav.push(Route::Dogs {});
            }
            _ => {}
        }
    });

    let loaded = (*dog.read()).clone();
    let Some(Ok(found)) = loaded else {
        return rsx! {
            div { style: "display: flex; justify-content: center; padding: 64px;", "Loading..." }
        };
    };
    let Some(found) = found else {
        return rsx! {
            div { style: "display: flex; flex-direction: column; align-items: center; padding: 64px;",
                p { style: "color: #6b7280;", "Dog not found" }
                Link { to: Route::Dogs {}, "Back to search" }
            }
        };
    };

    let image = found.image_src().to_string();
    let age = found.age_label();

    rsx! {
        div { style: "max-width: 960px; margin: 0 auto; padding: 48px 16px;",
            button {
                style: BUTTON_STYLE,
                onclick: move |_| {
                    nav.push(Route::Dogs {});
                },
                "← Back to search"
            }
            if !heading.is_empty() {
                h1 { style: "text-align: center; color: #115e59;", "🎉 {heading}" }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; margin-top: 24px; background: #fff; border-radius: 12px; overflow: hidden; box-shadow: 0 10px 24px rgba(0,0,0,0.08);",
                img {
                    style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; background: #ccfbf1;",
                    src: "{image}",
                    alt: "Photo of {found.name}",
                }
                div { style: "padding: 24px;",
                    h2 { style: "margin-top: 0;", "{found.name}" }
                    p { strong { "Breed: " } "{found.breed}" }
                    p { strong { "Age: " } "{age}" }
                    p { strong { "Location: " } "ZIP {found.zip_code}" }
                }
            }
        }
    }
}
