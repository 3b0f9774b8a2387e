//! Page sections and their rendered geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSection;

/// One of the six fixed regions of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Intro with name, rotating role and call-to-action buttons
    #[default]
    Summary,
    /// Skill categories
    Skills,
    /// Work history
    Experience,
    /// Degree and certifications
    Education,
    /// Project cards
    Projects,
    /// Contact details and form
    Contact,
}

impl SectionId {
    /// All sections, top to bottom.
    pub const ALL: [SectionId; 6] = [
        SectionId::Summary,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Number of sections.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in document order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Summary => "Summary",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Top and bottom edge of a rendered section, in pixels relative to the
/// viewport top (the shape of `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Top edge
    pub top: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl SectionBounds {
    /// Bounds from a top and bottom edge.
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a horizontal line at `y` crosses the section (edges inclusive).
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }

    /// Rendered height.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Read access to the rendered boundary of each section.
///
/// The rendering layer owns the elements; implementors hold non-owning
/// handles set once at mount. `None` means the section is not mounted.
pub trait SectionAnchors {
    /// Current bounds of `section`, if it is rendered.
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

impl SectionAnchors for [Option<SectionBounds>; SectionId::COUNT] {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self[section.index()]
    }
}

impl<A: SectionAnchors + ?Sized> SectionAnchors for &A {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        (**self).bounds(section)
    }
}
