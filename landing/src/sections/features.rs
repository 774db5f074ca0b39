use leptos::prelude::*;
use stormsense_core::{Feature, Layout, PreviewImages, SelectionState};

use super::icons::FeatureGlyph;
use crate::dom;

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let site = crate::site();
    let catalog = site.catalog();
    let fallback = site.media.preview_fallback.as_str();

    let layout = dom::use_layout(site.layout.wide_breakpoint_px);
    let mut initial = SelectionState::new(catalog.len());
    initial.set_layout(layout.get_untracked());
    let selection = RwSignal::new(initial);

    // One set of image slots per layout: a substitution stays with its <img>.
    let wide_images = RwSignal::new(PreviewImages::new(&catalog, fallback));
    let narrow_images = RwSignal::new(PreviewImages::new(&catalog, fallback));
    let features = StoredValue::new(catalog.as_slice().to_vec());

    Effect::new(move || {
        let current = layout.get();
        selection.maybe_update(|s| s.set_layout(current));
    });

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Powerful Storm Tracking Features"</h2>
                    <p class="section-description">
                        "StormSense gives you the tools you need to stay ahead of severe weather"
                    </p>
                </div>
                <Show
                    when=move || layout.get() == Layout::Wide
                    fallback=move || {
                        view! { <NarrowShowcase features=features selection=selection images=narrow_images /> }
                    }
                >
                    <WideShowcase features=features selection=selection images=wide_images />
                </Show>
            </div>
        </section>
    }
}

/// Preview stack beside the cards; the hovered card's image crossfades in.
#[component]
fn WideShowcase(
    features: StoredValue<Vec<Feature>>,
    selection: RwSignal<SelectionState>,
    images: RwSignal<PreviewImages>,
) -> impl IntoView {
    let previews = features.with_value(|features| {
        features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                view! {
                    <img
                        class="feature-preview"
                        alt=feature.preview_alt()
                        src=move || images.with(|i| i.src(index).to_owned())
                        style=move || selection.with(|s| s.wide_preview(index).to_css())
                        on:error=move |_| images.maybe_update(|i| i.mark_failed(index).is_some())
                        on:load=move |_| tracing::debug!(index, "feature preview loaded")
                    />
                }
            })
            .collect_view()
    });

    let cards = features.with_value(|features| {
        features
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, feature)| view! { <FeatureCard index=index feature=feature selection=selection /> })
            .collect_view()
    });

    view! {
        <div class="showcase-wide">
            <div class="preview-stack">{previews}</div>
            <div class="feature-list">{cards}</div>
        </div>
    }
}

/// Cards stacked vertically; tapping one opens its preview underneath.
#[component]
fn NarrowShowcase(
    features: StoredValue<Vec<Feature>>,
    selection: RwSignal<SelectionState>,
    images: RwSignal<PreviewImages>,
) -> impl IntoView {
    let items = features.with_value(|features| {
        features
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, feature)| {
                let alt = feature.preview_alt();
                view! {
                    <div class="feature-item">
                        <FeatureCard index=index feature=feature selection=selection />
                        <Show when=move || selection.with(|s| s.is_expanded(index))>
                            <div class="feature-inline-preview">
                                <img
                                    alt=alt.clone()
                                    src=move || images.with(|i| i.src(index).to_owned())
                                    on:error=move |_| {
                                        images.maybe_update(|i| i.mark_failed(index).is_some())
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    });

    view! { <div class="showcase-narrow">{items}</div> }
}

/// Forwards every pointer event; the selection state ignores the ones that
/// do not apply to the current layout.
#[component]
fn FeatureCard(
    index: usize,
    feature: Feature,
    selection: RwSignal<SelectionState>,
) -> impl IntoView {
    let Feature {
        icon,
        title,
        description,
        ..
    } = feature;

    view! {
        <div
            class=move || {
                if selection.with(|s| s.is_highlighted(index)) {
                    "feature-card selected"
                } else {
                    "feature-card"
                }
            }
            on:mouseenter=move |_| selection.maybe_update(|s| s.hover(index))
            on:mouseleave=move |_| selection.maybe_update(|s| s.leave())
            on:click=move |_| selection.maybe_update(|s| s.select(index))
        >
            <div class="feature-icon-wrap">
                <FeatureGlyph icon=icon />
            </div>
            <div class="feature-body">
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>
        </div>
    }
}
