//! Pagination trigger driven by selection proximity.
//!
//! A sentinel zone covers the last [`SENTINEL_ROWS`] rows of the loaded
//! list. When the selection enters that zone while the trigger is armed, the
//! next page is requested. The trigger is armed only while more results are
//! available and no fetch is outstanding; both guards are re-checked at fire
//! time because selection movement and fetch completion race.

/// Rows from the end of the list at which the next page is requested.
pub const SENTINEL_ROWS: usize = 5;

/// Whether `selected` sits inside the sentinel zone of a `loaded`-row list.
///
/// An empty list counts as sentinel-visible, so an exhausting probe can fire
/// immediately after a first page arrives empty.
#[must_use]
pub fn sentinel_visible(selected: usize, loaded: usize) -> bool {
    selected + SENTINEL_ROWS >= loaded
}

/// Arms and fires the pagination sentinel.
#[derive(Debug, Clone, Default)]
pub struct ScrollTrigger {
    armed: bool,
}

impl ScrollTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self { armed: false }
    }

    /// Re-arms or disarms the trigger from the current session state. Called
    /// after every event that can change `has_more` or the loading flag.
    pub fn sync(&mut self, has_more: bool, loading: bool) {
        self.armed = has_more && !loading;
    }

    #[must_use]
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Whether a next-page request should be issued right now.
    ///
    /// Requires the trigger to be armed, the guards to still hold, and the
    /// selection to sit inside the sentinel zone.
    #[must_use]
    pub fn should_fire(&self, selected: usize, loaded: usize, has_more: bool, loading: bool) -> bool {
        self.armed && has_more && !loading && sentinel_visible(selected, loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_tracks_distance_from_list_end() {
        assert!(!sentinel_visible(0, 40));
        assert!(!sentinel_visible(34, 40));
        assert!(sentinel_visible(35, 40));
        assert!(sentinel_visible(39, 40));
    }

    #[test]
    fn short_and_empty_lists_are_always_in_the_zone() {
        assert!(sentinel_visible(0, 0));
        assert!(sentinel_visible(0, 3));
    }

    #[test]
    fn fires_only_when_armed_and_guards_hold() {
        let mut trigger = ScrollTrigger::new();
        assert!(!trigger.should_fire(39, 40, true, false));

        trigger.sync(true, false);
        assert!(trigger.should_fire(39, 40, true, false));

        // Guards are re-checked at fire time even while armed.
        assert!(!trigger.should_fire(39, 40, false, false));
        assert!(!trigger.should_fire(39, 40, true, true));
    }

    #[test]
    fn disarms_while_loading_and_after_exhaustion() {
        let mut trigger = ScrollTrigger::new();
        trigger.sync(true, false);
        assert!(trigger.armed());

        trigger.sync(true, true);
        assert!(!trigger.armed());

        trigger.sync(false, false);
        assert!(!trigger.armed());
    }
}
