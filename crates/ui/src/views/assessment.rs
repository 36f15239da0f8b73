use dioxus::prelude::*;
use practice_core::model::AssessmentSessionId;

use crate::components::{LoadingState, RatingBadge};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AssessmentResultVm, map_assessment_result};

#[component]
pub fn AssessmentResultView(session_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let assessments = ctx.assessments();

    let resource = use_resource(move || {
        let assessments = assessments.clone();
        async move {
            let session = assessments
                .get_session(AssessmentSessionId::new(session_id))
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(session.as_ref().map(map_assessment_result))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Assessment Result" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    LoadingState {}
                },
                ViewState::Ready(None) => rsx! {
                    p { class: "not-found", "Session not found." }
                },
                ViewState::Ready(Some(result)) => rsx! {
                    ResultDetails { result }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ResultDetails(result: AssessmentResultVm) -> Element {
    let answer_count = result.answers.len();

    rsx! {
        dl { class: "assessment-result",
            dt { "Learner" }
            dd { "{result.user_label}" }

            dt { "Completed" }
            dd { "{result.completed_at}" }

            dt { "Recorded" }
            dd { "{result.recorded_at_str}" }

            dt { "Score" }
            dd {
                "{result.score_str} "
                RatingBadge { tier: result.rating, show_description: true }
            }
        }

        h3 { "Answers ({answer_count})" }
        if result.answers.is_empty() {
            p { "No answers were submitted." }
        } else {
            ol { class: "answers",
                for answer in result.answers {
                    li { code { "{answer}" } }
                }
            }
        }
    }
}
