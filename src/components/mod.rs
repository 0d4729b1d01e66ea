//! Page components for Fleetsite.
//!
//! Generic controls live in `fleetsite-ui`; these wire them to the page
//! controller and the mounted-element registries.

mod anchor_link;
mod contact_form;
mod reveal_card;
mod site_header;

pub use anchor_link::{AnchorLink, Section};
pub use contact_form::ContactForm;
pub use reveal_card::RevealCard;
pub use site_header::SiteHeader;
