//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `catalog` holds the page view-model; `flash` models the auto-clearing
//! message regions it owns.

pub mod catalog;
pub mod flash;
