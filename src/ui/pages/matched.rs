use dioxus::prelude::*;

use crate::ui::pages::details::DogProfile;

#[component]
pub fn Matched(id: String) -> Element {
    rsx! {
        DogProfile {
            id,
            heading: "Congratulations! You've been matched!".to_string(),
        }
    }
}
