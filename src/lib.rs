pub mod traits;
pub mod config;
pub mod palette;
pub mod image;
pub mod framebuffer;
pub mod scroll_bar;
pub mod state;
pub mod domain;
pub mod rendering;
pub mod panel;

// Export host seams
pub use traits::{Canvas, ColorIndex, MouseButton, PanelEvents, PanelHost};

// Export configuration
pub use config::{Orientation, PanelConfig, PanelMode, PixelRect, ScrollBarConfig, GRID_SIZE};

// Export the panel and its collaborators
pub use panel::{ImagePanel, InputEvent};
pub use scroll_bar::{ScrollBar, ScrollBarPart};
pub use image::{IndexedImage, IMAGE_SIZE};
pub use framebuffer::Framebuffer;

// Export palette support
pub use palette::{color_of, hex_to_color32, PALETTE};
