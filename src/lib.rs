//! PawHaven application library
//!
//! Pet listings, adoption inquiries and the HTML shells that front them,
//! assembled as kernel modules.

pub mod bootstrap;
pub mod modules;
pub mod utils;

pub use bootstrap::{prepare, run, App};
pub use modules::register_all;
