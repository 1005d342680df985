//! Page lifecycle state.
//!
//! The whole page has two stages: a loading splash and the content view.
//! The switch happens once, after a fixed dwell, and never reverses.

use std::time::Duration;

/// How long the splash stays up before the content is revealed.
pub const SPLASH_DWELL: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Content,
}

/// The single mutable state cell of the page.
#[derive(Debug)]
pub struct PageState {
    is_loading: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self { is_loading: true }
    }

    pub fn stage(&self) -> Stage {
        if self.is_loading {
            Stage::Loading
        } else {
            Stage::Content
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Advance the lifecycle given time elapsed since activation.
    ///
    /// Flips to `Content` once `SPLASH_DWELL` has passed. Returns `true`
    /// only on the flip itself; the transition is one-way and every later
    /// call is a no-op.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.is_loading && elapsed >= SPLASH_DWELL {
            self.is_loading = false;
            true
        } else {
            false
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state = PageState::new();
        assert!(state.is_loading());
        assert_eq!(state.stage(), Stage::Loading);
    }

    #[test]
    fn test_stays_loading_before_dwell() {
        let mut state = PageState::new();
        assert!(!state.tick(Duration::from_millis(1999)));
        assert_eq!(state.stage(), Stage::Loading);
    }

    #[test]
    fn test_flips_to_content_at_dwell() {
        let mut state = PageState::new();
        assert!(state.tick(SPLASH_DWELL));
        assert_eq!(state.stage(), Stage::Content);
    }

    #[test]
    fn test_transition_fires_at_most_once() {
        let mut state = PageState::new();
        assert!(state.tick(Duration::from_millis(2000)));
        assert!(!state.tick(Duration::from_millis(5000)));
        assert!(!state.tick(Duration::from_millis(1)));
        assert_eq!(state.stage(), Stage::Content);
    }
}
