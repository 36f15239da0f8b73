use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentResultView, HomeView, TrackDiagnosticsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment/:session_id", AssessmentResultView)] Assessment { session_id: u64 },
        #[route("/tracks", TrackDiagnosticsView)] Tracks {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Study Buddy" }
            ul {
                li { Link { to: Route::Home {}, "Dashboard" } }
                li { Link { to: Route::Tracks {}, "Track slugs" } }
            }
        }
    }
}
