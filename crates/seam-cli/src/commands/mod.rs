//! Command implementations for the seam CLI

pub mod access_codes;
pub mod devices;
pub mod events;
pub mod session;
pub mod webviews;

pub use session::session_token;
