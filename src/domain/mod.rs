//! Domain logic for the image panel.
//!
//! This module contains the pure, host-independent math:
//! - Viewport operations (screen-to-resource transform, grid snapping,
//!   clamping, pan-step extraction)

pub mod viewport_operations;
