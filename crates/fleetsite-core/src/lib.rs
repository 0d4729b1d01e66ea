//! Fleetsite Core Library
//!
//! Page behaviors for the Fleetsite marketing site, as plain state
//! machines with no dependency on a renderer.
//!
//! ## Overview
//!
//! - [`menu`]: mobile navigation toggle with page scroll lock
//! - [`anchor`]: in-page link resolution for smooth scrolling
//! - [`validation`] and [`form`]: contact form rules and field state
//! - [`submit`]: asynchronous submission with a guaranteed control restore
//! - [`reveal`]: one-shot reveal of cards entering the viewport
//! - [`header`]: header hide/show on scroll direction
//!
//! [`PageController`] bundles all of them behind one `attach`/`detach`
//! lifecycle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fleetsite_core::{PageController, SimulatedSubmitter, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let submitter = SimulatedSubmitter::from_config(&config.submit);
//! let mut page = PageController::new(config);
//! page.attach();
//!
//! page.toggle_menu();
//! page.field_input("email", "guest@example.com");
//! page.scroll(120.0);
//! ```

pub mod anchor;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod header;
pub mod logging;
pub mod menu;
pub mod reveal;
pub mod submit;
pub mod validation;

// Re-exports
pub use anchor::AnchorMap;
pub use config::{ClassNames, LoggingConfig, Messages, SiteConfig, SubmitConfig};
pub use controller::{submit_contact_form, PageController, PageHandle, SUBMIT_LABEL};
pub use error::{SiteError, SiteResult, SubmitError};
pub use form::{ContactForm, ErrorNode, FieldState, FormRecord};
pub use header::{HeaderScroll, HeaderState};
pub use logging::{init_logging, read_journal, JournalEntry, JournalLayer};
pub use menu::{ClickTarget, MenuFlags, MenuState};
pub use reveal::{intersection_ratio, RevealSet, Span};
pub use submit::{
    BeginOutcome, Notice, Notifier, SimulatedSubmitter, SubmissionFlow, SubmitControl,
    SubmitPhase, SubmitReport, Submitter,
};
pub use validation::FieldKind;
