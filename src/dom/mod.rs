// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod files;
pub mod navigation;
pub mod toast;

pub use element::*;
pub use builder::*;
pub use events::*;
