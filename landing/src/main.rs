// StormSense Landing Page - Leptos 0.8 Edition
// Developed with 💀 by The StormSense Team (c)2025

mod dom;
mod logging;
mod pages;
mod sections;

use std::sync::OnceLock;

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use pages::*;
use stormsense_core::{Page, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting StormSense landing");
    leptos::mount::mount_to_body(App);
}

/// Site configuration, parsed once from the embedded `site.toml`.
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(SiteConfig::embedded)
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <RouteTitle />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment(Page::Home.segment()) view=HomePage />
                <Route path=StaticSegment(Page::PrivacyPolicy.segment()) view=PrivacyPolicyPage />
            </Routes>
        </Router>
    }
}

/// Keeps the document title in step with the current route.
#[component]
fn RouteTitle() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        match Page::from_path(&path) {
            Some(page) => dom::set_title(page.title()),
            None => tracing::debug!(%path, "no page for path"),
        }
    });
}
