use dioxus::prelude::*;
use dioxus_router::Link;
use practice_core::model::SessionStats;

use crate::components::{LoadingState, RatingBadge};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardSessionVm, DashboardVm, build_dashboard};

const RECENT_LIMIT: u32 = 10;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let assessments = ctx.assessments();
    let user_id = ctx.current_user_id();
    let signed_in = user_id.is_some();

    let resource = use_resource(move || {
        let assessments = assessments.clone();
        let user_id = user_id.clone();
        async move {
            let Some(user_id) = user_id else {
                return Ok(build_dashboard(&SessionStats::default(), &[]));
            };
            let stats = assessments
                .session_stats(&user_id)
                .await
                .map_err(ViewError::from)?;
            let sessions = assessments
                .list_recent_sessions(&user_id, RECENT_LIMIT)
                .await
                .map_err(ViewError::from)?;
            Ok::<DashboardVm, ViewError>(build_dashboard(&stats, &sessions))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Dashboard" }

            if !signed_in {
                p { "Sign in to keep track of your progress." }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    LoadingState { message: "Loading your progress..." }
                },
                ViewState::Ready(dashboard) => rsx! {
                    DashboardStats { dashboard: dashboard.clone() }
                    if dashboard.recent.is_empty() {
                        p { "No assessments yet. Start a practice track to see results here." }
                    } else {
                        h3 { "Recent sessions" }
                        ul { class: "recent-sessions",
                            for row in dashboard.recent {
                                RecentSessionRow { key: "{row.session_id}", row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn DashboardStats(dashboard: DashboardVm) -> Element {
    rsx! {
        dl { class: "dashboard-stats",
            dt { "Sessions" }
            dd { "{dashboard.total_sessions}" }

            dt { "Average score" }
            dd { "{dashboard.average_score_str}" }

            dt { "Best score" }
            dd { "{dashboard.best_score_str}" }
        }
    }
}

#[component]
fn RecentSessionRow(row: DashboardSessionVm) -> Element {
    rsx! {
        li {
            Link { class: "session-link", to: Route::Assessment { session_id: row.session_id },
                span { class: "session-date", "{row.recorded_at_str}" }
                span { class: "session-score", "Score: {row.score_str}" }
            }
            RatingBadge { tier: row.rating }
            span { class: "session-answers", "{row.answer_count} answers" }
        }
    }
}
