//! Page-wide state shared through Leptos context.
//!
//! One instance per page load, created by `App` and torn down with it.

use leptos::prelude::*;
use portfolio_core::section::SectionId;
use portfolio_core::theme::Theme;
use portfolio_core::tracker::SectionTracker;
use portfolio_core::PortfolioConfig;

use crate::dom::{self, SectionRefs};

/// Signals and handles every section component reads.
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Active section, scrolled flag and reveal flags
    pub tracker: RwSignal<SectionTracker>,
    /// Current color scheme
    pub theme: RwSignal<Theme>,
    /// Whether the mobile navigation drawer is open
    pub menu_open: RwSignal<bool>,
    /// Section elements, bound once at mount
    pub anchors: SectionRefs,
    /// Configuration this page was built with
    pub config: StoredValue<PortfolioConfig>,
}

impl PageContext {
    fn new(config: PortfolioConfig) -> Self {
        Self {
            tracker: RwSignal::new(SectionTracker::with_geometry(
                config.reference_line,
                config.scrolled_offset,
            )),
            theme: RwSignal::new(Theme::default()),
            menu_open: RwSignal::new(false),
            anchors: SectionRefs::new(),
            config: StoredValue::new(config),
        }
    }

    /// Smooth-scroll to a section and close the mobile menu.
    pub fn scroll_to(&self, section: SectionId) {
        dom::scroll_into_view(&self.anchors, section);
        self.menu_open.set(false);
    }

    /// Whether `section` is highlighted in the navigation.
    pub fn is_active(&self, section: SectionId) -> bool {
        self.tracker.with(|t| t.is_active(section))
    }

    /// Whether `section` has played its entrance animation.
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.tracker.with(|t| t.is_revealed(section))
    }

    /// Theme-dependent class pick that re-renders on theme change.
    pub fn pick(&self, dark: &'static str, light: &'static str) -> &'static str {
        self.theme.get().pick(dark, light)
    }
}

/// Create the page state and expose it to descendants.
pub fn provide_page(config: PortfolioConfig) -> PageContext {
    let page = PageContext::new(config);
    provide_context(page);
    page
}

/// Page state provided by `App`.
pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
