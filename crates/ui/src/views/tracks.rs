use dioxus::prelude::*;
use services::SlugReport;

use crate::components::LoadingState;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Operator page: lists malformed track slugs and runs the known repair.
#[component]
pub fn TrackDiagnosticsView() -> Element {
    let ctx = use_context::<AppContext>();
    let maintenance = ctx.track_maintenance();
    let maintenance_for_fix = ctx.track_maintenance();
    let mut fix_message = use_signal(|| None::<String>);

    let mut resource = use_resource(move || {
        let maintenance = maintenance.clone();
        async move {
            maintenance
                .check_all_slugs()
                .await
                .map_err(ViewError::from)
        }
    });

    let state: ViewState<SlugReport> = view_state_from_resource(resource);

    let on_fix = move |_: Event<MouseData>| {
        let maintenance = maintenance_for_fix.clone();
        spawn(async move {
            let message = match maintenance.fix_track_slug().await {
                Ok(outcome) => outcome.message,
                Err(err) => ViewError::from(err).message().to_string(),
            };
            fix_message.set(Some(message));
            resource.restart();
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Track Slugs" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    LoadingState { message: "Scanning tracks..." }
                },
                ViewState::Ready(report) => rsx! {
                    p { "Total tracks: {report.total}" }
                    if report.bad_slugs.is_empty() {
                        p { class: "slugs-ok", "All slugs look good." }
                    } else {
                        ul { class: "bad-slugs",
                            for entry in report.bad_slugs {
                                li { key: "{entry.slug}",
                                    strong { "{entry.title}" }
                                    " "
                                    code { "{entry.slug}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            button { class: "fix-slug", onclick: on_fix, "Fix known slug" }
            if let Some(message) = fix_message() {
                p { class: "fix-result", "{message}" }
            }
        }
    }
}
