use log::info;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// The screens the site can show. Exactly one is rendered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Booking,
    Stories,
}

pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Scrolls the browser window with smooth behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0);
            options.behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Holds the current page and remembers which page the viewport was last
/// scrolled for, so the scroll follows page changes rather than renders.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Page,
    scrolled_for: Option<Page>,
}

impl Navigator {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn go_to(&mut self, page: Page) {
        if self.current != page {
            info!("Navigating from {:?} to {:?}", self.current, page);
        }
        self.current = page;
    }

    /// Called after every render. Returns true when it scrolled.
    pub fn sync_viewport<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        if self.scrolled_for == Some(self.current) {
            return false;
        }
        viewport.scroll_to_top();
        self.scrolled_for = Some(self.current);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingViewport {
        scrolls: Cell<usize>,
    }

    impl Viewport for CountingViewport {
        fn scroll_to_top(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(Navigator::default().current(), Page::Home);
    }

    #[test]
    fn first_mount_scrolls_once() {
        let viewport = CountingViewport::default();
        let mut navigator = Navigator::default();

        assert!(navigator.sync_viewport(&viewport));
        assert!(!navigator.sync_viewport(&viewport));
        assert_eq!(viewport.scrolls.get(), 1);
    }

    #[test]
    fn every_transition_scrolls_exactly_once() {
        let viewport = CountingViewport::default();
        let mut navigator = Navigator::default();
        navigator.sync_viewport(&viewport);

        for target in [Page::Booking, Page::Home, Page::Stories] {
            let before = viewport.scrolls.get();
            navigator.go_to(target);
            navigator.sync_viewport(&viewport);
            // a re-render without a transition must not scroll again
            navigator.sync_viewport(&viewport);

            assert_eq!(navigator.current(), target);
            assert_eq!(viewport.scrolls.get(), before + 1);
        }
        assert_eq!(viewport.scrolls.get(), 4);
    }

    #[test]
    fn reselecting_current_page_does_not_scroll() {
        let viewport = CountingViewport::default();
        let mut navigator = Navigator::default();
        navigator.sync_viewport(&viewport);

        navigator.go_to(Page::Home);
        assert!(!navigator.sync_viewport(&viewport));
        assert_eq!(viewport.scrolls.get(), 1);
    }

    #[test]
    fn state_is_last_requested_target() {
        let mut navigator = Navigator::default();
        let targets = [Page::Stories, Page::Booking, Page::Booking, Page::Home, Page::Stories];
        for target in targets {
            navigator.go_to(target);
        }
        assert_eq!(navigator.current(), Page::Stories);
    }
}
