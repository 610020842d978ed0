//! FILENAME: app/src-tauri/src/commands/mod.rs
// PURPOSE: Tauri command surface, one module per screen.

pub mod entry;
pub mod list;
pub mod nav;
pub mod utils;

// Re-export commands so they are accessible via crate::commands::*
pub use entry::*;
pub use list::*;
pub use nav::*;
