use leptos::prelude::*;
use leptos_router::components::A;
use stormsense_core::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=Page::Home.path() attr:class="btn btn-primary">
                "Back to StormSense"
            </A>
        </div>
    }
}
