//! Scroll-driven section tracking.
//!
//! [`SectionTracker`] keeps two pieces of page state in sync with the
//! viewport:
//!
//! - the **active** section, highlighted in the navigation, recomputed on
//!   every scroll event from the section boundaries
//! - the **revealed** set, one-shot flags raised by intersection callbacks
//!   that drive the entrance animations
//!
//! The tracker owns no DOM handles. It reads geometry through
//! [`SectionAnchors`] and is told about intersections by section id, so the
//! whole contract is testable without a browser.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::section::{SectionAnchors, SectionId};

/// Distance from the viewport top, in pixels, of the line that decides
/// which section is active.
pub const REFERENCE_LINE: f64 = 150.0;

/// Fraction of a section's height that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLLED_OFFSET: f64 = 50.0;

/// First section, in document order, whose bounds contain `line`.
pub fn find_active(anchors: &impl SectionAnchors, line: f64) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|&id| {
        anchors
            .bounds(id)
            .is_some_and(|bounds| bounds.contains(line))
    })
}

/// Per-section "has been revealed" flags. Flags only ever go from unset to set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSet([bool; SectionId::COUNT]);

impl RevealSet {
    /// Raise the flag for `section`. Returns `true` only the first time.
    pub fn insert(&mut self, section: SectionId) -> bool {
        let slot = &mut self.0[section.index()];
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Whether `section` has been revealed.
    pub fn contains(&self, section: SectionId) -> bool {
        self.0[section.index()]
    }

    /// Number of revealed sections.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }

    /// Whether no section has been revealed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Revealed sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL.into_iter().filter(|&id| self.contains(id))
    }
}

/// Active section and reveal state for one page instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
    revealed: RevealSet,
    scrolled: bool,
    reference_line: f64,
    scrolled_offset: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// Tracker with the first section active and nothing revealed.
    pub fn new() -> Self {
        Self::with_geometry(REFERENCE_LINE, SCROLLED_OFFSET)
    }

    /// Tracker with a custom reference line and "scrolled" offset.
    pub fn with_geometry(reference_line: f64, scrolled_offset: f64) -> Self {
        Self {
            active: SectionId::default(),
            revealed: RevealSet::default(),
            scrolled: false,
            reference_line,
            scrolled_offset,
        }
    }

    /// Section currently highlighted in the navigation.
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Whether `section` is the active one.
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    /// Whether the page has scrolled past the navigation offset.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Snapshot of the reveal flags.
    pub fn revealed(&self) -> RevealSet {
        self.revealed
    }

    /// Whether `section` has been revealed.
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(section)
    }

    /// Recompute the active section after a scroll.
    ///
    /// When no section contains the reference line (overscroll above the
    /// first or below the last section) the previous active section is kept.
    /// Returns `true` when the active section changed.
    pub fn recompute(&mut self, scroll_y: f64, anchors: &impl SectionAnchors) -> bool {
        self.scrolled = scroll_y > self.scrolled_offset;

        let Some(found) = find_active(anchors, self.reference_line) else {
            return false;
        };
        if found == self.active {
            return false;
        }
        debug!(from = %self.active, to = %found, "active section changed");
        self.active = found;
        true
    }

    /// Raise the reveal flag for a section that crossed the visibility
    /// threshold. Returns `true` only the first time for each section.
    pub fn mark_revealed(&mut self, section: SectionId) -> bool {
        let newly = self.revealed.insert(section);
        if newly {
            debug!(section = %section, "section revealed");
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBounds;

    /// Contiguous 1000px sections laid out from `offset` (viewport-relative).
    fn stacked(offset: f64) -> [Option<SectionBounds>; SectionId::COUNT] {
        let mut layout = [None; SectionId::COUNT];
        for id in SectionId::ALL {
            let top = offset + id.index() as f64 * 1000.0;
            layout[id.index()] = Some(SectionBounds::new(top, top + 1000.0));
        }
        layout
    }

    #[test]
    fn test_first_section_active_before_any_scroll() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Summary);
        assert!(!tracker.scrolled());
        assert!(tracker.revealed().is_empty());
    }

    #[test]
    fn test_recompute_picks_section_under_line() {
        let mut tracker = SectionTracker::new();
        // scrolled 2500px: experience spans -500..500
        assert!(tracker.recompute(2500.0, &stacked(-2500.0)));
        assert_eq!(tracker.active(), SectionId::Experience);

        assert!(!tracker.recompute(2500.0, &stacked(-2500.0)));
        assert!(tracker.scrolled());
    }

    #[test]
    fn test_shared_edge_goes_to_earlier_section() {
        let mut tracker = SectionTracker::new();
        // skills ends exactly on the line, experience starts on it
        tracker.recompute(1850.0, &stacked(-1850.0));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut tracker = SectionTracker::new();
        tracker.recompute(4500.0, &stacked(-4500.0));
        assert_eq!(tracker.active(), SectionId::Projects);

        // overscroll past the end: everything is above the line
        assert!(!tracker.recompute(9000.0, &stacked(-9000.0)));
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut tracker = SectionTracker::new();
        let mut layout = stacked(-1000.0);
        layout[SectionId::Skills.index()] = None;
        tracker.recompute(1000.0, &layout);
        assert_eq!(tracker.active(), SectionId::Summary);
    }

    #[test]
    fn test_mark_revealed_is_one_shot() {
        let mut tracker = SectionTracker::new();
        assert!(tracker.mark_revealed(SectionId::Projects));
        assert!(!tracker.mark_revealed(SectionId::Projects));
        assert!(tracker.is_revealed(SectionId::Projects));
        assert!(!tracker.is_revealed(SectionId::Skills));
        assert_eq!(tracker.revealed().len(), 1);
    }

    #[test]
    fn test_reveal_set_iterates_in_document_order() {
        let mut set = RevealSet::default();
        set.insert(SectionId::Contact);
        set.insert(SectionId::Summary);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![SectionId::Summary, SectionId::Contact]);
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let mut tracker = SectionTracker::new();
        tracker.recompute(50.0, &stacked(-50.0));
        assert!(!tracker.scrolled());
        tracker.recompute(51.0, &stacked(-51.0));
        assert!(tracker.scrolled());
    }
}
