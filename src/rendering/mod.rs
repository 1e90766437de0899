//! Rendering subsystem for the image panel
//!
//! This module contains the drawing helpers used by the panel:
//! - Selection overlay (three-ring marker around the selection)

pub mod selection_overlay;
