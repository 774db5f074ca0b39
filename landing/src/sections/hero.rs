use std::rc::Rc;

use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stormsense_core::gesture::GestureCallback;
use stormsense_core::{GestureKind, MediaFailure, MediaFallbackController, PlayAttempt};
use wasm_bindgen_futures::JsFuture;

use super::icons::{AppleLogo, PlayLogo};
use crate::dom::{self, DocumentGestureTarget};

pub const COMING_SOON: &str = "Coming Soon";

type Controller = MediaFallbackController<DocumentGestureTarget>;

/// Handles behind the background video. `Copy`, so every event handler can
/// hold one.
#[derive(Clone, Copy)]
struct HeroMedia {
    video: NodeRef<Video>,
    controller: StoredValue<Controller, LocalStorage>,
    video_visible: RwSignal<bool>,
    fallback_visible: RwSignal<bool>,
}

impl HeroMedia {
    fn new() -> Self {
        Self {
            video: NodeRef::new(),
            controller: StoredValue::new_local(MediaFallbackController::new(
                DocumentGestureTarget::new(),
            )),
            video_visible: RwSignal::new(true),
            fallback_visible: RwSignal::new(false),
        }
    }

    fn mounted(self, video: &web_sys::HtmlVideoElement) {
        video.set_muted(true);
        video.set_loop(true);
        if let Some(attempt) = self.controller.try_update_value(|c| c.mount()) {
            self.play(attempt);
        }
    }

    fn play(self, attempt: PlayAttempt) {
        let Some(video) = self.video.get_untracked() else {
            return;
        };
        let promise = match video.play() {
            Ok(promise) => promise,
            Err(err) => {
                self.rejected(attempt, dom::describe_js_error(&err));
                return;
            }
        };
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                self.rejected(attempt, dom::describe_js_error(&err));
            }
        });
    }

    fn rejected(self, attempt: PlayAttempt, reason: String) {
        // The listener only schedules; its closure gets released by the
        // controller, which must not happen while the closure is running.
        let on_gesture: GestureCallback = Rc::new(move |kind| {
            spawn_local(async move { self.gesture(kind) });
        });
        self.controller
            .try_update_value(|c| c.on_play_rejected(attempt, &reason, on_gesture));
        self.sync();
    }

    fn gesture(self, kind: GestureKind) {
        let retry = self
            .controller
            .try_update_value(|c| c.on_gesture(kind))
            .flatten();
        if let Some(attempt) = retry {
            self.play(attempt);
        }
    }

    fn playing(self) {
        self.controller.try_update_value(|c| c.on_playing());
        self.sync();
    }

    fn errored(self, url: &str) {
        self.controller
            .try_update_value(|c| c.on_media_error(MediaFailure::asset(url)));
        self.sync();
    }

    fn unmount(self) {
        self.controller.try_update_value(|c| c.unmount());
    }

    fn sync(self) {
        let visibility = self
            .controller
            .try_with_value(|c| (c.video_visible(), c.fallback_visible()));
        if let Some((video, fallback)) = visibility {
            self.video_visible.set(video);
            self.fallback_visible.set(fallback);
        }
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let site = crate::site();
    let media = HeroMedia::new();
    let video_url = site.media.hero_video.as_str();
    let fallback_style = format!("background-image: url('{}');", site.media.hero_fallback);

    media.video.on_load(move |video| media.mounted(&video));
    on_cleanup(move || media.unmount());

    view! {
        <section class="hero">
            <video
                node_ref=media.video
                class="hero-video"
                class:hidden=move || !media.video_visible.get()
                src=video_url
                autoplay=true
                muted=true
                playsinline=true
                preload="metadata"
                on:playing=move |_| media.playing()
                on:error=move |_| media.errored(video_url)
                on:loadeddata=move |_| tracing::debug!("hero video data loaded")
            >
                "Your browser does not support the video tag."
            </video>
            <div
                class="hero-fallback"
                class:hidden=move || !media.fallback_visible.get()
                style=fallback_style
            ></div>
            <div class="hero-overlay"></div>

            <div class="hero-grid">
                <div class="hero-content">
                    <div class="hero-brand">
                        <img
                            class="hero-logo"
                            src=site.media.logo.as_str()
                            alt="StormSense Logo"
                            width="48"
                            height="48"
                        />
                        <h1 class="hero-title">
                            "Storm"<span class="hero-title-accent">"Sense"</span>
                        </h1>
                    </div>
                    <p class="hero-subtitle">
                        "Advanced Weather Intelligence for Storm Preparedness"
                    </p>
                    <p class="hero-description">
                        "Get hyperlocal severe weather forecasts, real-time radar tracking, "
                        "and community-driven storm reports. Stay ahead of dangerous weather "
                        "with precision forecasting technology that keeps you and your loved ones safe."
                    </p>
                    <HeroButtons compact=true />
                    <HeroButtons compact=false />
                </div>
                <div class="hero-screens">
                    <img
                        src=site.media.hero_screenshots.as_str()
                        alt="StormSense App Screenshots"
                    />
                </div>
            </div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeroAction {
    AppStore,
    GooglePlay,
    WebApp,
}

impl HeroAction {
    const ALL: [HeroAction; 3] = [Self::AppStore, Self::GooglePlay, Self::WebApp];

    fn caption(self) -> &'static str {
        match self {
            Self::AppStore => "Download on the",
            Self::GooglePlay => "GET IT ON",
            Self::WebApp => "View the",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AppStore => "App Store",
            Self::GooglePlay => "Google Play",
            Self::WebApp => "Web App",
        }
    }

    /// Store listings are not linked from the hero yet.
    fn run(self) {
        match self {
            Self::AppStore | Self::GooglePlay => dom::alert(COMING_SOON),
            Self::WebApp => dom::open_external(&crate::site().links.web_app),
        }
    }

    fn icon(self) -> AnyView {
        match self {
            Self::AppStore => view! { <AppleLogo /> }.into_any(),
            Self::GooglePlay => view! { <PlayLogo /> }.into_any(),
            Self::WebApp => view! {
                <img
                    class="store-icon"
                    src=crate::site().media.web_app_icon.as_str()
                    alt="Web App Icon"
                />
            }
            .into_any(),
        }
    }
}

/// Compact variant shows one-line labels for small screens; CSS picks which
/// variant is displayed.
#[component]
fn HeroButtons(compact: bool) -> impl IntoView {
    let class = if compact {
        "hero-buttons hero-buttons-compact"
    } else {
        "hero-buttons hero-buttons-full"
    };

    view! {
        <div class=class>
            {HeroAction::ALL
                .into_iter()
                .map(|action| {
                    view! {
                        <button class="store-button" on:click=move |_| action.run()>
                            <span class="store-button-icon">{action.icon()}</span>
                            <span class="store-button-text">
                                {(!compact)
                                    .then(|| {
                                        view! {
                                            <span class="store-button-caption">
                                                {action.caption()}
                                            </span>
                                        }
                                    })}
                                <span class="store-button-label">{action.label()}</span>
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_actions_keep_store_order() {
        let labels: Vec<&str> = HeroAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["App Store", "Google Play", "Web App"]);
    }

    #[test]
    fn full_buttons_carry_captions() {
        assert_eq!(HeroAction::AppStore.caption(), "Download on the");
        assert_eq!(HeroAction::GooglePlay.caption(), "GET IT ON");
        assert_eq!(HeroAction::WebApp.caption(), "View the");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom::tests::click;
    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    /// Resolves after queued local tasks have had a turn.
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn click_after_blocked_autoplay_retries_once() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();

        let media = HeroMedia::new();
        media.controller.update_value(|c| {
            c.mount();
        });
        media.rejected(PlayAttempt::Initial, "NotAllowedError".to_owned());
        assert_eq!(media.controller.with_value(|c| c.pending_listeners()), 2);

        click();
        // The listener only queued the gesture.
        assert!(!media.controller.with_value(|c| c.retry_attempted()));

        next_tick().await;
        assert!(media.controller.with_value(|c| c.retry_attempted()));
        assert_eq!(media.controller.with_value(|c| c.pending_listeners()), 0);
        assert!(media.video_visible.get_untracked());

        // The retry was handed out; a rejected retry now falls back.
        media.rejected(PlayAttempt::GestureRetry, "NotAllowedError".to_owned());
        assert!(!media.video_visible.get_untracked());
        assert!(media.fallback_visible.get_untracked());

        click();
        next_tick().await;
        assert!(media.fallback_visible.get_untracked());
    }
}
