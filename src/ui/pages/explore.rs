use dioxus::prelude::*;

use crate::app::{DogCard, Route, BUTTON_STYLE, PRIMARY_BUTTON_STYLE};
use crate::domain::entities::category::Category;
use crate::domain::entities::favorites::FavoritesSet;
use crate::domain::errors::ListingError;
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::ports::adoption_api::ApiError;

#[component]
pub fn Explore(category: String) -> Element {
    let Some(category) = Category::from_slug(&category) else {
        return rsx! {
            div { style: "display: flex; flex-direction: column; align-items: center; padding: 64px;",
                p { "Category not found" }
                Link { to: Route::Dogs {}, "Browse all dogs" }
            }
        };
    };

    rsx! {
        CategoryExplore { category }
    }
}

/// Featured dogs for one category, with its own favorites and match button.
#[component]
fn CategoryExplore(category: Category) -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let nav = navigator();
    let mut favorites = use_signal(FavoritesSet::new);

    let dogs_service = services.dogs.clone();
    let featured = use_resource(move || {
        let dogs = dogs_service.clone();
        async move { dogs.featured_dogs().await }
    });

    use_effect(move || {
        if let Some(Err(ApiError::Unauthorized)) = &*featured.read() {
            state.end_session();
            nav.replace(Route::Login {});
        }
    });

    let matches = services.matches.clone();
    let favorite_count = favorites.read().len();
    let title = category.title();
    let description = category.description();
    let accent = category.accent();

    let loaded = (*featured.read()).clone();
    let body = match loaded {
        None => rsx! {
            div { style: "display: flex; justify-content: center; padding: 64px;", "Loading..." }
        },
        Some(Ok(dogs)) if !dogs.is_empty() => rsx! {
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px;",
                for dog in dogs {
                    DogCard {
                        key: "{dog.id}",
                        is_favorite: favorites.read().has(&dog.id),
                        on_toggle_favorite: {
                            let id = dog.id.clone();
                            move |_| {
                                favorites.write().toggle(&id);
                            }
                        },
                        dog: dog.clone(),
                    }
                }
            }
        },
        Some(_) => rsx! {
            div { style: "display: flex; flex-direction: column; align-items: center; padding: 64px; background: #fff; border-radius: 12px;",
                p { style: "color: #6b7280;", "No dogs found in this category" }
                Link { to: Route::Dogs {}, "Browse all dogs" }
            }
        },
    };

    rsx! {
        div { style: "max-width: 1200px; margin: 0 auto; padding: 24px 16px;",
            header { style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        nav.push(Route::Dogs {});
                    },
                    "← View all dogs"
                }
                if favorite_count > 0 {
                    button {
                        style: PRIMARY_BUTTON_STYLE,
                        onclick: move |_| {
                            let candidates = favorites.read().clone();
                            let matches = matches.clone();
                            spawn(async move {
                                let mut rng = rand::thread_rng();
                                match matches.find_match(&candidates, &mut rng).await {
                                    Ok(id) => {
                                        nav.push(Route::Matched { id: id.to_string() });
                                    }
                                    Err(ListingError::Unauthorized) => {
                                        state.end_session();
                                        nav.replace(Route::Login {});
                                    }
                                    Err(err) => state.error("Error", &err.to_string()),
                                }
                            });
                        },
                        "♥ Match ({favorite_count})"
                    }
                }
            }
            div { style: "margin: 24px 0; padding: 24px; border-radius: 12px; background: {accent}; color: #fff;",
                h2 { style: "margin: 0 0 8px;", "{title}" }
                p { style: "margin: 0;", "{description}" }
            }
            {body}
        }
    }
}
