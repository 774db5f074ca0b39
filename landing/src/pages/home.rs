// Home page - hero, showcase, download call-to-action
use crate::sections::{DownloadSection, FeatureShowcase, Footer, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <FeatureShowcase />
            <DownloadSection />
            <Footer />
        </div>
    }
}
