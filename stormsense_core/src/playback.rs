//! Media Fallback Controller for the hero background video.
//!
//! Flow:
//! 1. `mount` asks for an immediate play attempt
//! 2. a rejected first attempt arms one-time touch/click listeners
//! 3. the first gesture releases both listeners and asks for one retry
//! 4. a rejected retry or a media error hides the video for good and shows
//!    the static background instead
//!
//! The controller never touches the DOM. Callers feed it media events and
//! render [`video_visible`](MediaFallbackController::video_visible) and
//! [`fallback_visible`](MediaFallbackController::fallback_visible).

use crate::error::MediaFailure;
use crate::gesture::{GestureCallback, GestureGuard, GestureKind, GestureTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoPlaybackState {
    #[default]
    Attempting,
    Playing,
    /// Terminal for the lifetime of the controller.
    Failed,
}

/// Which `play()` call a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAttempt {
    Initial,
    GestureRetry,
}

pub struct MediaFallbackController<T: GestureTarget> {
    target: T,
    state: VideoPlaybackState,
    guard: Option<GestureGuard<T>>,
    retried: bool,
    fallback_visible: bool,
}

impl<T: GestureTarget> MediaFallbackController<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            state: VideoPlaybackState::Attempting,
            guard: None,
            retried: false,
            fallback_visible: false,
        }
    }

    /// Element mounted: try to play right away.
    pub fn mount(&mut self) -> PlayAttempt {
        tracing::debug!("hero video mounted, attempting autoplay");
        PlayAttempt::Initial
    }

    /// A `play()` call was rejected.
    ///
    /// After the initial attempt this arms the gesture listeners, each of
    /// which calls `on_gesture`. After the gesture retry it gives up.
    pub fn on_play_rejected(
        &mut self,
        attempt: PlayAttempt,
        reason: &str,
        on_gesture: GestureCallback,
    ) {
        if self.state != VideoPlaybackState::Attempting {
            tracing::debug!(?attempt, state = ?self.state, "ignoring late play rejection");
            return;
        }
        match attempt {
            PlayAttempt::Initial if !self.retried && self.guard.is_none() => {
                let guard = GestureGuard::arm(self.target.clone(), on_gesture);
                if guard.pending() == 0 {
                    // No gesture can ever arrive.
                    self.fail(MediaFailure::permission(format!(
                        "{reason} (gesture listeners unavailable)"
                    )));
                    return;
                }
                tracing::debug!(reason, "autoplay blocked, waiting for a user gesture");
                self.guard = Some(guard);
            }
            PlayAttempt::Initial => {}
            PlayAttempt::GestureRetry => self.fail(MediaFailure::permission(reason)),
        }
    }

    /// A gesture listener fired.
    ///
    /// The first call releases both listeners and returns the single retry;
    /// every later call returns `None`.
    pub fn on_gesture(&mut self, kind: GestureKind) -> Option<PlayAttempt> {
        let guard = self.guard.take()?;
        guard.release();
        self.retried = true;
        tracing::debug!(%kind, "user gesture received, retrying playback");
        Some(PlayAttempt::GestureRetry)
    }

    /// The video reported that playback started.
    pub fn on_playing(&mut self) {
        if self.state == VideoPlaybackState::Failed {
            tracing::debug!("video reported playing after fallback, keeping fallback");
            return;
        }
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
        self.state = VideoPlaybackState::Playing;
        self.fallback_visible = false;
        tracing::debug!("hero video playing");
    }

    /// The video element reported a load or decode error.
    pub fn on_media_error(&mut self, failure: MediaFailure) {
        self.fail(failure);
    }

    /// Element is going away: drop any listeners still waiting for a gesture.
    pub fn unmount(&mut self) {
        if let Some(guard) = self.guard.take() {
            tracing::debug!(pending = guard.pending(), "hero unmounted before any gesture");
            guard.release();
        }
    }

    fn fail(&mut self, failure: MediaFailure) {
        if self.state == VideoPlaybackState::Failed {
            return;
        }
        self.guard = None;
        self.state = VideoPlaybackState::Failed;
        self.fallback_visible = true;
        tracing::warn!(kind = failure.kind(), "{failure}, showing fallback background");
    }

    pub fn state(&self) -> VideoPlaybackState {
        self.state
    }

    pub fn video_visible(&self) -> bool {
        self.state != VideoPlaybackState::Failed
    }

    pub fn fallback_visible(&self) -> bool {
        self.fallback_visible
    }

    pub fn pending_listeners(&self) -> usize {
        self.guard.as_ref().map_or(0, GestureGuard::pending)
    }

    pub fn retry_attempted(&self) -> bool {
        self.retried
    }
}

impl<T: GestureTarget> std::fmt::Debug for MediaFallbackController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaFallbackController")
            .field("state", &self.state)
            .field("guard", &self.guard)
            .field("retried", &self.retried)
            .field("fallback_visible", &self.fallback_visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::fake::FakeDocument;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Controller plus a queue of gestures its listeners reported, the way
    /// the page defers gesture handling to the next task.
    struct Harness {
        document: FakeDocument,
        controller: MediaFallbackController<FakeDocument>,
        queued: Rc<RefCell<Vec<GestureKind>>>,
    }

    impl Harness {
        fn new() -> Self {
            let document = FakeDocument::default();
            Self {
                controller: MediaFallbackController::new(document.clone()),
                document,
                queued: Rc::default(),
            }
        }

        fn callback(&self) -> GestureCallback {
            let queued = Rc::clone(&self.queued);
            Rc::new(move |kind| queued.borrow_mut().push(kind))
        }

        fn reject(&mut self, attempt: PlayAttempt) {
            let callback = self.callback();
            self.controller
                .on_play_rejected(attempt, "NotAllowedError", callback);
        }

        /// Dispatches a gesture and drains the queue into the controller.
        fn gesture(&mut self, kind: GestureKind) -> Vec<PlayAttempt> {
            self.document.dispatch(kind);
            let queued: Vec<GestureKind> = self.queued.borrow_mut().drain(..).collect();
            queued
                .into_iter()
                .filter_map(|k| self.controller.on_gesture(k))
                .collect()
        }
    }

    #[test]
    fn mount_requests_initial_play() {
        let mut h = Harness::new();
        assert_eq!(h.controller.mount(), PlayAttempt::Initial);
        assert_eq!(h.controller.state(), VideoPlaybackState::Attempting);
        assert!(h.controller.video_visible());
        assert!(!h.controller.fallback_visible());
        assert_eq!(h.document.listener_count(), 0);
    }

    #[test]
    fn successful_autoplay_never_registers_listeners() {
        let mut h = Harness::new();
        h.controller.mount();
        h.controller.on_playing();
        assert_eq!(h.controller.state(), VideoPlaybackState::Playing);
        assert_eq!(h.document.listener_count(), 0);
    }

    #[test]
    fn blocked_autoplay_arms_touch_and_click() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        assert_eq!(h.controller.pending_listeners(), 2);
        assert_eq!(h.document.count_for(GestureKind::TouchStart), 1);
        assert_eq!(h.document.count_for(GestureKind::Click), 1);
        assert!(h.controller.video_visible());
    }

    #[test]
    fn blocked_autoplay_without_listeners_falls_back_immediately() {
        let document = FakeDocument::refusing();
        let mut controller = MediaFallbackController::new(document.clone());
        controller.mount();
        controller.on_play_rejected(PlayAttempt::Initial, "NotAllowedError", Rc::new(|_| {}));

        assert_eq!(controller.pending_listeners(), 0);
        assert_eq!(controller.state(), VideoPlaybackState::Failed);
        assert!(!controller.video_visible());
        assert!(controller.fallback_visible());
        assert!(!controller.retry_attempted());

        controller.on_playing();
        assert_eq!(controller.state(), VideoPlaybackState::Failed);
    }

    #[test]
    fn click_triggers_exactly_one_retry_and_removes_both_listeners() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);

        let retries = h.gesture(GestureKind::Click);
        assert_eq!(retries, vec![PlayAttempt::GestureRetry]);
        assert_eq!(h.document.listener_count(), 0);
        assert!(h.controller.retry_attempted());

        assert!(h.gesture(GestureKind::TouchStart).is_empty());
        assert!(h.gesture(GestureKind::Click).is_empty());
    }

    #[test]
    fn touch_then_synthetic_click_still_retries_once() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);

        // Both listeners fire before the deferred handler runs.
        h.document.dispatch(GestureKind::TouchStart);
        h.document.dispatch(GestureKind::Click);
        let queued: Vec<GestureKind> = h.queued.borrow_mut().drain(..).collect();
        assert_eq!(queued, vec![GestureKind::TouchStart, GestureKind::Click]);

        let retries: Vec<_> = queued
            .into_iter()
            .filter_map(|k| h.controller.on_gesture(k))
            .collect();
        assert_eq!(retries, vec![PlayAttempt::GestureRetry]);
        assert_eq!(h.document.listener_count(), 0);
    }

    #[test]
    fn rejected_retry_falls_back_for_good() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        h.gesture(GestureKind::Click);
        h.reject(PlayAttempt::GestureRetry);

        assert_eq!(h.controller.state(), VideoPlaybackState::Failed);
        assert!(!h.controller.video_visible());
        assert!(h.controller.fallback_visible());

        for kind in [GestureKind::Click, GestureKind::TouchStart, GestureKind::Click] {
            assert!(h.gesture(kind).is_empty());
            assert!(!h.controller.video_visible());
            assert!(h.controller.fallback_visible());
        }
        assert_eq!(h.document.listener_count(), 0);
    }

    #[test]
    fn retry_that_plays_hides_fallback() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        h.gesture(GestureKind::TouchStart);
        h.controller.on_playing();

        assert_eq!(h.controller.state(), VideoPlaybackState::Playing);
        assert!(h.controller.video_visible());
        assert!(!h.controller.fallback_visible());
    }

    #[test]
    fn media_error_is_one_way() {
        let mut h = Harness::new();
        h.controller.mount();
        h.controller
            .on_media_error(MediaFailure::asset("https://cdn/hero.mp4"));
        assert_eq!(h.controller.state(), VideoPlaybackState::Failed);

        h.controller.on_playing();
        assert_eq!(h.controller.state(), VideoPlaybackState::Failed);
        assert!(!h.controller.video_visible());
        assert!(h.controller.fallback_visible());
    }

    #[test]
    fn media_error_while_waiting_for_gesture_releases_listeners() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        h.controller
            .on_media_error(MediaFailure::asset("https://cdn/hero.mp4"));

        assert_eq!(h.document.listener_count(), 0);
        assert!(h.gesture(GestureKind::Click).is_empty());
    }

    #[test]
    fn late_initial_rejection_after_failure_arms_nothing() {
        let mut h = Harness::new();
        h.controller.mount();
        h.controller
            .on_media_error(MediaFailure::asset("https://cdn/hero.mp4"));
        h.reject(PlayAttempt::Initial);
        assert_eq!(h.document.listener_count(), 0);
    }

    #[test]
    fn playing_while_armed_releases_listeners() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        h.controller.on_playing();
        assert_eq!(h.document.listener_count(), 0);
        assert!(h.gesture(GestureKind::Click).is_empty());
    }

    #[test]
    fn unmount_before_gesture_leaves_no_listeners() {
        let mut h = Harness::new();
        h.controller.mount();
        h.reject(PlayAttempt::Initial);
        assert_eq!(h.document.listener_count(), 2);

        h.controller.unmount();
        assert_eq!(h.document.listener_count(), 0);
        assert_eq!(h.controller.pending_listeners(), 0);
    }

    #[test]
    fn dropping_controller_leaves_no_listeners() {
        let document = FakeDocument::default();
        {
            let mut controller = MediaFallbackController::new(document.clone());
            controller.mount();
            controller.on_play_rejected(PlayAttempt::Initial, "blocked", Rc::new(|_| {}));
            assert_eq!(document.listener_count(), 2);
        }
        assert_eq!(document.listener_count(), 0);
    }
}
