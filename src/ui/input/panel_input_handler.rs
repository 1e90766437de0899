//! Translation of egui pointer input into panel events.
//!
//! egui reports pointer state in points; the panel wants discrete press,
//! drag, release and hover events in screen pixels, with per-tick motion
//! deltas for drags. [`PointerTracker`] bridges the two and remembers which
//! button is held between frames.

use eframe::egui;
use rpixed::{InputEvent, MouseButton};
use crate::app::DrawingNudge;

/// Buttons forwarded to the panel, in priority order.
const TRACKED_BUTTONS: [(egui::PointerButton, MouseButton); 3] = [
    (egui::PointerButton::Primary, MouseButton::Primary),
    (egui::PointerButton::Secondary, MouseButton::Secondary),
    (egui::PointerButton::Middle, MouseButton::Middle),
];

/// Pointer state sampled from egui for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerFrame {
    /// Pointer position in screen pixels, if known
    pub pos: Option<(i32, i32)>,
    /// Whether the pointer is over the screen image
    pub inside: bool,
    /// Buttons that went down this frame, indexed like `TRACKED_BUTTONS`
    pub pressed: [bool; 3],
    /// Buttons that went up this frame
    pub released: [bool; 3],
}

/// Converts a position in points to a screen pixel.
///
/// # Arguments
/// * `pos` - Pointer position in egui points
/// * `screen_rect` - Where the screen image is painted
/// * `scale` - Points per screen pixel
pub fn to_screen_pixel(pos: egui::Pos2, screen_rect: egui::Rect, scale: f32) -> (i32, i32) {
    let x = ((pos.x - screen_rect.min.x) / scale).floor() as i32;
    let y = ((pos.y - screen_rect.min.y) / scale).floor() as i32;
    (x, y)
}

/// Samples egui's pointer for the screen painted at `screen_rect`.
pub fn sample_pointer(ctx: &egui::Context, screen_rect: egui::Rect, scale: f32) -> PointerFrame {
    ctx.input(|i| {
        let hover = i.pointer.hover_pos();
        PointerFrame {
            pos: hover.map(|p| to_screen_pixel(p, screen_rect, scale)),
            inside: hover.is_some_and(|p| screen_rect.contains(p)),
            pressed: TRACKED_BUTTONS.map(|(b, _)| i.pointer.button_pressed(b)),
            released: TRACKED_BUTTONS.map(|(b, _)| i.pointer.button_released(b)),
        }
    })
}

/// Reads arrow keys as a drawing-target nudge.
pub fn sample_nudge(ctx: &egui::Context) -> Option<DrawingNudge> {
    ctx.input(|i| {
        let mut nudge = DrawingNudge { tiles_x: 0, tiles_y: 0 };
        if i.key_pressed(egui::Key::ArrowLeft) {
            nudge.tiles_x -= 1;
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            nudge.tiles_x += 1;
        }
        if i.key_pressed(egui::Key::ArrowUp) {
            nudge.tiles_y -= 1;
        }
        if i.key_pressed(egui::Key::ArrowDown) {
            nudge.tiles_y += 1;
        }
        (nudge.tiles_x != 0 || nudge.tiles_y != 0).then_some(nudge)
    })
}

/// Pointer state carried across frames.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last known pointer position in screen pixels
    last_pos: Option<(i32, i32)>,
    /// Button held since a press inside the screen
    held: Option<MouseButton>,
}

impl PointerTracker {
    /// Creates a tracker with no button held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the button currently held, if any.
    pub fn held(&self) -> Option<MouseButton> {
        self.held
    }

    /// Turns one sampled frame into panel events.
    ///
    /// Only one button is tracked at a time: the first press wins until it
    /// is released. Presses outside the screen are ignored, but a drag that
    /// started inside keeps reporting after leaving it.
    pub fn step(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = frame.pos.or(self.last_pos);

        if let Some(held) = self.held {
            let (x, y) = pos.unwrap_or((0, 0));

            if let (Some((x, y)), Some((last_x, last_y))) = (frame.pos, self.last_pos) {
                if (x, y) != (last_x, last_y) {
                    events.push(InputEvent::Drag {
                        button: held,
                        x,
                        y,
                        dx: x - last_x,
                        dy: y - last_y,
                    });
                }
            }

            let index = TRACKED_BUTTONS.iter().position(|(_, b)| *b == held);
            if index.is_some_and(|i| frame.released[i]) {
                events.push(InputEvent::Release { button: held, x, y });
                self.held = None;
            }
        } else if let (Some((x, y)), true) = (frame.pos, frame.inside) {
            let pressed = TRACKED_BUTTONS
                .iter()
                .zip(frame.pressed)
                .enumerate()
                .find_map(|(index, ((_, button), down))| down.then_some((index, *button)));

            match pressed {
                // A click shorter than one frame arrives as press and release together
                Some((index, button)) if frame.released[index] => {
                    events.push(InputEvent::Press { button, x, y });
                    events.push(InputEvent::Release { button, x, y });
                }
                Some((_, button)) => {
                    events.push(InputEvent::Press { button, x, y });
                    self.held = Some(button);
                }
                None => events.push(InputEvent::Hover { x, y }),
            }
        }

        self.last_pos = frame.pos.or(self.last_pos);
        events
    }
}
