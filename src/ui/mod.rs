//! UI panel rendering subsystem
//!
//! This module contains the egui side of the pixel editor host:
//! - Header panel (editor mode selector)
//! - Screen view (framebuffer upload and integer scaling)
//! - Status bar (help line and positions)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer and keyboard translation)

pub mod header;
pub mod screen_view;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
