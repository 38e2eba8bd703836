use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::dog::Dog;
use crate::ui::pages::details::Details;
use crate::ui::pages::dogs::Dogs;
use crate::ui::pages::explore::Explore;
use crate::ui::pages::login::Login;
use crate::ui::pages::matched::Matched;
use crate::ui::state::app_state::{AppState, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/dogs")]
    Dogs {},
    #[route("/details?:id")]
    Details { id: String },
    #[route("/match?:id")]
    Matched { id: String },
    #[route("/explore/:category")]
    Explore { category: String },
}

pub const PAGE_STYLE: &str = "min-height: 100vh; background: linear-gradient(135deg, #ecfeff, #ffffff); font-family: sans-serif; color: #1f2937;";
pub const BUTTON_STYLE: &str = "border: 1px solid #99f6e4; background: #fff; color: #0f766e; padding: 6px 12px; border-radius: 6px; cursor: pointer;";
pub const PRIMARY_BUTTON_STYLE: &str = "border: none; background: #14b8a6; color: #fff; padding: 8px 14px; border-radius: 6px; cursor: pointer;";

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_hook(|| Services::connect(&config.api_base_url));
    let services = match services {
        Ok(services) => services,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to reach the adoption service: {err}" }
                }
            };
        }
    };
    use_context_provider(|| services);
    use_context_provider(AppState::new);

    rsx! {
        div { style: PAGE_STYLE,
            NoticeBanner {}
            Router::<Route> {}
        }
    }
}

/// Dismissible notification for the most recent error or success.
#[component]
fn NoticeBanner() -> Element {
    let mut state = use_context::<AppState>();
    let Some(notice) = state.notice.read().clone() else {
        return rsx! {};
    };
    let background = if notice.destructive { "#fee2e2" } else { "#ccfbf1" };

    rsx! {
        div {
            role: "status",
            style: "position: fixed; right: 16px; bottom: 16px; max-width: 360px; background: {background}; border-radius: 8px; padding: 12px 16px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
            strong { "{notice.title}" }
            p { style: "margin: 4px 0 8px;", "{notice.description}" }
            button {
                style: BUTTON_STYLE,
                onclick: move |_| state.dismiss_notice(),
                "Dismiss"
            }
        }
    }
}

#[component]
pub fn DogCard(dog: Dog, is_favorite: bool, on_toggle_favorite: EventHandler<()>) -> Element {
    let heart = if is_favorite { "♥" } else { "♡" };
    let label = if is_favorite {
        format!("Remove {} from favorites", dog.name)
    } else {
        format!("Add {} to favorites", dog.name)
    };
    let image = dog.image_src().to_string();
    let age = dog.age_label();
    let id = dog.id.to_string();

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 12px; overflow: hidden; background: #fff; position: relative;",
            button {
                style: "position: absolute; top: 12px; right: 12px; border: none; border-radius: 50%; width: 32px; height: 32px; background: rgba(255,255,255,0.85); cursor: pointer; color: #ef4444;",
                role: "switch",
                aria_pressed: is_favorite,
                aria_label: "{label}",
                onclick: move |event| {
                    event.stop_propagation();
                    on_toggle_favorite.call(());
                },
                "{heart}"
            }
            img {
                style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; background: #ccfbf1;",
                src: "{image}",
                alt: "Photo of {dog.name}, a {dog.breed}",
            }
            div { style: "padding: 12px 16px;",
                div { style: "display: flex; justify-content: space-between; align-items: start;",
                    div {
                        h3 { style: "margin: 0;", "{dog.name}" }
                        p { style: "margin: 4px 0; color: #6b7280;", "{dog.breed}" }
                    }
                    span { style: "border: 1px solid #99f6e4; border-radius: 999px; padding: 2px 8px; color: #0f766e;", "{age}" }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 12px; padding-top: 12px; border-top: 1px solid #f3f4f6;",
                    span { style: "color: #6b7280;", "ZIP {dog.zip_code}" }
                    Link {
                        to: Route::Details { id },
                        "Details"
                    }
                }
            }
        }
    }
}
