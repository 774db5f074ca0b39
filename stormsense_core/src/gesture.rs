//! One-shot document gesture listeners as an owned resource.

use std::fmt;
use std::rc::Rc;

/// User gestures that browsers accept as permission to start media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    TouchStart,
    Click,
}

impl GestureKind {
    pub const ALL: [GestureKind; 2] = [GestureKind::TouchStart, GestureKind::Click];

    /// DOM event type.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Callback invoked when a registered gesture fires.
pub type GestureCallback = Rc<dyn Fn(GestureKind)>;

/// Where gesture listeners get registered (the document, in a browser).
///
/// Implementations register one-time listeners; `unlisten` must be safe to
/// call for a listener that already fired. `listen` returns `None` when
/// nothing was registered.
pub trait GestureTarget: Clone {
    type Handle;

    fn listen(&self, kind: GestureKind, callback: GestureCallback) -> Option<Self::Handle>;

    fn unlisten(&self, handle: Self::Handle);
}

/// Owns the touch and click listeners armed after a blocked autoplay.
///
/// Dropping the guard deregisters every listener it still holds.
pub struct GestureGuard<T: GestureTarget> {
    target: T,
    handles: Vec<T::Handle>,
}

impl<T: GestureTarget> GestureGuard<T> {
    /// Registers one listener per [`GestureKind`], all sharing `callback`.
    /// Kinds the target refused are skipped.
    pub fn arm(target: T, callback: GestureCallback) -> Self {
        let handles: Vec<_> = GestureKind::ALL
            .iter()
            .filter_map(|&kind| target.listen(kind, Rc::clone(&callback)))
            .collect();
        tracing::debug!(armed = handles.len(), "armed gesture retry listeners");
        Self { target, handles }
    }

    /// Listeners actually registered and not yet released.
    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    /// Deregisters all listeners now.
    pub fn release(mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        for handle in self.handles.drain(..) {
            self.target.unlisten(handle);
        }
        tracing::debug!("released gesture retry listeners");
    }
}

impl<T: GestureTarget> Drop for GestureGuard<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T: GestureTarget> fmt::Debug for GestureGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureGuard")
            .field("pending", &self.handles.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeDocument;
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn arm_registers_touch_and_click() {
        let document = FakeDocument::default();
        let guard = GestureGuard::arm(document.clone(), Rc::new(|_| {}));
        assert_eq!(guard.pending(), 2);
        assert_eq!(document.count_for(GestureKind::TouchStart), 1);
        assert_eq!(document.count_for(GestureKind::Click), 1);
    }

    #[test]
    fn drop_deregisters_everything() {
        let document = FakeDocument::default();
        {
            let _guard = GestureGuard::arm(document.clone(), Rc::new(|_| {}));
            assert_eq!(document.listener_count(), 2);
        }
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn release_after_one_listener_fired_removes_the_other() {
        let document = FakeDocument::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let guard = GestureGuard::arm(
            document.clone(),
            Rc::new(move |kind| sink.borrow_mut().push(kind)),
        );

        document.dispatch(GestureKind::Click);
        assert_eq!(*seen.borrow(), vec![GestureKind::Click]);
        assert_eq!(document.listener_count(), 1);

        guard.release();
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn refused_registrations_are_not_counted() {
        let document = FakeDocument::refusing();
        let guard = GestureGuard::arm(document.clone(), Rc::new(|_| {}));
        assert_eq!(guard.pending(), 0);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn event_names_match_dom() {
        assert_eq!(GestureKind::TouchStart.event_name(), "touchstart");
        assert_eq!(GestureKind::Click.to_string(), "click");
    }
}
