use leptos::prelude::*;
use leptos_router::components::A;
use stormsense_core::Page;
use stormsense_core::privacy::CONTACT_EMAIL;

/// Site footer. `pinned` fixes it to the bottom of the viewport (privacy page).
#[component]
pub fn Footer(#[prop(optional)] pinned: bool) -> impl IntoView {
    let site = crate::site();
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <footer class="footer" class:footer-pinned=pinned>
            <div class="container footer-inner">
                <A href=Page::Home.path() attr:class="footer-brand">
                    <img class="footer-logo" src=site.media.logo.as_str() alt="StormSense" />
                    <span class="footer-title">"StormSense"</span>
                </A>
                <div class="footer-links">
                    <A href=Page::PrivacyPolicy.path() attr:class="footer-link">
                        "Privacy Policy"
                    </A>
                    <a href=mailto class="footer-link">"Contact"</a>
                    <a href=site.links.web_app.as_str() target="_blank" class="footer-link">
                        "Web App"
                    </a>
                </div>
                <p class="footer-copyright">"© 2025 Excarta. All rights reserved."</p>
            </div>
        </footer>
    }
}
