use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use practice_core::time::fixed_now;
use services::{AppServices, AssessmentService, Clock, TrackMaintenanceService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentResultView, HomeView, TrackDiagnosticsView};

#[derive(Clone)]
struct TestApp {
    user_id: Option<String>,
    services: AppServices,
}

impl UiApp for TestApp {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    fn assessments(&self) -> Arc<AssessmentService> {
        self.services.assessments()
    }

    fn track_maintenance(&self) -> Arc<TrackMaintenanceService> {
        self.services.track_maintenance()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Assessment(u64),
    Tracks,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Assessment(session_id) => rsx! { AssessmentResultView { session_id } },
        ViewKind::Tracks => rsx! { TrackDiagnosticsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources settle before rendering.
    pub async fn settle(&mut self) -> String {
        self.rebuild();
        self.drive_async().await;
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over a fresh in-memory store.
pub fn setup_view_harness(view: ViewKind, user_id: Option<&str>) -> ViewHarness {
    setup_view_harness_with_storage(view, user_id, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    user_id: Option<&str>,
    storage: Storage,
) -> ViewHarness {
    let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()));
    let app = Arc::new(TestApp {
        user_id: user_id.map(str::to_owned),
        services,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
