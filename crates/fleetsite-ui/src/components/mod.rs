//! Reusable page components

mod burger;
mod field;
mod submit_button;

pub use burger::*;
pub use field::*;
pub use submit_button::*;
