//! State management modules for the image panel.
//!
//! This module contains state-only logic (no drawing or host concerns):
//! - Viewport state (visible window offset into the backing resource)
//! - Selection state (selection origin and size)
//! - Interaction state (pan accumulator, pointer capture)

mod viewport;
mod selection;
mod interaction;

pub use viewport::ViewportState;
pub use selection::SelectionState;
pub use interaction::{InteractionState, PointerTarget};
