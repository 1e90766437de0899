//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Panel input translation (egui pointer state to screen-pixel events)
//! - Keyboard nudges of the drawing target

pub mod panel_input_handler;
