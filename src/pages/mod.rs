//! Page components for Fleetsite.

mod landing;

pub use landing::Landing;
