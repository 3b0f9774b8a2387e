//! Scroll sweeps over a realistic page layout.

use portfolio_core::section::{SectionBounds, SectionId};
use portfolio_core::tracker::{REFERENCE_LINE, SectionTracker, find_active};

/// Section heights in document order, roughly what the page renders on a
/// laptop viewport.
const HEIGHTS: [f64; SectionId::COUNT] = [900.0, 1400.0, 1100.0, 800.0, 1900.0, 1200.0];

/// Document-space `(top, bottom)` of every section; the page starts at 0.
fn document_layout() -> [(f64, f64); SectionId::COUNT] {
    let mut out = [(0.0, 0.0); SectionId::COUNT];
    let mut top = 0.0;
    for (i, height) in HEIGHTS.iter().enumerate() {
        out[i] = (top, top + height);
        top += height;
    }
    out
}

/// Viewport-relative bounds after scrolling `scroll_y` pixels.
fn viewport(scroll_y: f64) -> [Option<SectionBounds>; SectionId::COUNT] {
    document_layout().map(|(top, bottom)| Some(SectionBounds::new(top - scroll_y, bottom - scroll_y)))
}

/// Reference scan written independently of the crate.
fn expected_active(scroll_y: f64) -> Option<SectionId> {
    let line = scroll_y + REFERENCE_LINE;
    document_layout()
        .iter()
        .position(|&(top, bottom)| top <= line && line <= bottom)
        .map(|i| SectionId::ALL[i])
}

#[test]
fn active_section_follows_reference_line() {
    let mut tracker = SectionTracker::new();
    let total: f64 = HEIGHTS.iter().sum();

    let mut scroll_y = 0.0;
    while scroll_y <= total {
        tracker.recompute(scroll_y, &viewport(scroll_y));
        if let Some(expected) = expected_active(scroll_y) {
            assert_eq!(tracker.active(), expected, "scroll_y = {scroll_y}");
        }
        assert_eq!(
            SectionId::ALL
                .iter()
                .filter(|&&id| tracker.is_active(id))
                .count(),
            1
        );
        scroll_y += 25.0;
    }
}

#[test]
fn scrolling_back_up_restores_earlier_sections() {
    let mut tracker = SectionTracker::new();
    tracker.recompute(5000.0, &viewport(5000.0));
    assert_eq!(tracker.active(), SectionId::Projects);

    tracker.recompute(0.0, &viewport(0.0));
    assert_eq!(tracker.active(), SectionId::Summary);
    assert!(!tracker.scrolled());
}

#[test]
fn overscroll_keeps_last_active_section() {
    let mut tracker = SectionTracker::new();
    let total: f64 = HEIGHTS.iter().sum();

    tracker.recompute(total - 200.0, &viewport(total - 200.0));
    assert_eq!(tracker.active(), SectionId::Contact);

    // rubber-band past the bottom of the page
    tracker.recompute(total + 400.0, &viewport(total + 400.0));
    assert_eq!(tracker.active(), SectionId::Contact);
    assert_eq!(find_active(&viewport(total + 400.0), REFERENCE_LINE), None);
}

#[test]
fn reveals_survive_any_scroll_sequence() {
    let mut tracker = SectionTracker::new();
    tracker.mark_revealed(SectionId::Summary);
    tracker.mark_revealed(SectionId::Education);

    for scroll_y in [0.0, 3000.0, 7000.0, 120.0, -80.0] {
        tracker.recompute(scroll_y, &viewport(scroll_y));
        assert!(tracker.is_revealed(SectionId::Summary));
        assert!(tracker.is_revealed(SectionId::Education));
        assert!(!tracker.is_revealed(SectionId::Skills));
    }

    // repeated intersection callbacks change nothing
    for _ in 0..3 {
        assert!(!tracker.mark_revealed(SectionId::Education));
    }
    assert_eq!(tracker.revealed().len(), 2);
}
