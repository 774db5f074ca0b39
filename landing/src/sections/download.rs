use leptos::prelude::*;

use super::icons::{AppleLogo, PlayLogo};
use crate::dom;

#[component]
pub fn DownloadSection() -> impl IntoView {
    let site = crate::site();
    let app_store = site.links.app_store.as_str();
    let google_play = site.links.google_play.as_str();

    view! {
        <section id="download" class="download">
            <div class="container download-grid">
                <div class="download-mockup">
                    <img
                        src=site.media.download_mockup.as_str()
                        alt="StormSense App on Phone"
                        loading="lazy"
                    />
                </div>
                <div class="download-info">
                    <h2 class="section-title">"Download StormSense Today"</h2>
                    <p class="download-description">
                        "Get hyperlocal severe weather forecasts, live radar maps, and community "
                        "reports right on your device. Stay prepared for any storm with StormSense."
                    </p>
                    <div class="download-actions">
                        <button class="store-button" on:click=move |_| dom::open_external(app_store)>
                            <span class="store-button-icon"><AppleLogo /></span>
                            <span class="store-button-text">
                                <span class="store-button-caption">"Download on the"</span>
                                <span class="store-button-label">"App Store"</span>
                            </span>
                        </button>
                        <button class="store-button" on:click=move |_| dom::open_external(google_play)>
                            <span class="store-button-icon"><PlayLogo /></span>
                            <span class="store-button-text">
                                <span class="store-button-caption">"GET IT ON"</span>
                                <span class="store-button-label">"Google Play"</span>
                            </span>
                        </button>
                    </div>
                    <p class="download-note">"Available for free on iOS and Android devices."</p>
                </div>
            </div>
        </section>
    }
}
