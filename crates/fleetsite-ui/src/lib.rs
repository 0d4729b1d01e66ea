//! Fleetsite UI Components
//!
//! Dioxus building blocks for the Fleetsite page. Components are
//! stateless: they render field, menu and control state owned by
//! `fleetsite_core::PageController` and report DOM events back through
//! handlers.
//!
//! ## DOM contract
//!
//! Class names come from `fleetsite_core::ClassNames`, so the stylesheet
//! and the behaviors agree on one set of selectors:
//! - `burger-button` / `nav-links`: menu control and panel, `active` when open
//! - `error` on an invalid field, followed by its `error-message` node
//! - `submit-button`: disabled with a busy label while submitting

pub mod components;

pub use components::*;
