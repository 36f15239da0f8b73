use dioxus::prelude::*;

/// Text with an animated highlight sweeping across it.
#[component]
pub fn ShimmerText(text: String, #[props(default)] class: String) -> Element {
    rsx! {
        span { class: "shimmer-text {class}", "{text}" }
    }
}

/// Placeholder shown while a view's data is being fetched.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-state", role: "status",
            span { class: "loading-spinner" }
            ShimmerText { text: message }
        }
    }
}
