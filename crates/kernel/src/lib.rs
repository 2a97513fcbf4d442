//! Core building blocks shared by every PawHaven crate: settings, the module
//! lifecycle trait, and the registry that drives it.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{AppState, InitCtx, Migration, Module};
pub use registry::ModuleRegistry;
