use dioxus::prelude::*;

use crate::vm::RatingTier;

#[component]
pub fn RatingBadge(tier: RatingTier, #[props(default)] show_description: bool) -> Element {
    let meta = tier.meta();

    rsx! {
        span { class: "rating-badge {meta.class}", title: "{meta.description}",
            "{meta.label}"
        }
        if show_description {
            p { class: "rating-description", "{meta.description}" }
        }
    }
}
