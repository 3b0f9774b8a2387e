//! # portfolio-core
//!
//! Behavioral core of the portfolio site, free of any DOM or WASM dependency
//! so it can be tested natively.
//!
//! ## Architecture
//!
//! - [`section`] - the six page sections and the geometry the tracker reads
//! - [`tracker`] - active section + one-shot reveal flags driven by scroll
//! - [`contact`] - contact form draft and submission state machine
//! - [`relay`] - email relay contract and EmailJS request encoding
//! - [`rotation`] - rotating role headline
//! - [`theme`] - dark / light theme
//! - [`config`] - relay identifiers and timing knobs
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```rust
//! use portfolio_core::section::{SectionBounds, SectionId};
//! use portfolio_core::tracker::SectionTracker;
//!
//! let mut tracker = SectionTracker::new();
//! assert_eq!(tracker.active(), SectionId::Summary);
//!
//! let mut layout = [None; SectionId::COUNT];
//! layout[SectionId::Summary.index()] = Some(SectionBounds::new(-900.0, 100.0));
//! layout[SectionId::Skills.index()] = Some(SectionBounds::new(100.0, 1100.0));
//!
//! assert!(tracker.recompute(900.0, &layout));
//! assert_eq!(tracker.active(), SectionId::Skills);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod contact;
pub mod error;
pub mod relay;
pub mod rotation;
pub mod section;
pub mod theme;
pub mod tracker;

pub use config::{PortfolioConfig, RelayConfig};
pub use contact::{ContactForm, FormDraft, FormField, ResetTimer, Submission, SubmissionStatus};
pub use error::{RelayError, SubmitError};
pub use relay::{EmailRelay, TemplateParams};
pub use section::{SectionAnchors, SectionBounds, SectionId};
pub use tracker::{RevealSet, SectionTracker};
