use crate::controllers::interactive::session_config::ZoomDirection;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// A session call decoded from raw pointer events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerCommand {
    Click { x: i32, y: i32 },
    Zoom { x: i32, y: i32, direction: ZoomDirection },
    /// Drag delta in raster pixels.
    Pan { dx: f64, dy: f64 },
}

/// Tracks the cursor and right-button drag, translating window coordinates
/// into raster pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput {
    raster_width: u32,
    raster_height: u32,
    window_width: u32,
    window_height: u32,
    cursor: Option<(f64, f64)>,
    drag_anchor: Option<(f64, f64)>,
}

impl PointerInput {
    pub fn new(raster_width: u32, raster_height: u32, window_width: u32, window_height: u32) -> Self {
        Self {
            raster_width,
            raster_height,
            window_width: window_width.max(1),
            window_height: window_height.max(1),
            cursor: None,
            drag_anchor: None,
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerCommand> {
        self.cursor = Some((x, y));

        let anchor = self.drag_anchor?;
        self.drag_anchor = Some((x, y));

        let (dx, dy) = self.window_delta_to_raster(x - anchor.0, y - anchor.1);

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        Some(PointerCommand::Pan { dx, dy })
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
        self.drag_anchor = None;
    }

    pub fn handle_button(&mut self, button: MouseButton, state: ElementState) -> Option<PointerCommand> {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left if pressed => {
                let (x, y) = self.cursor_pixel()?;
                Some(PointerCommand::Click { x, y })
            }
            MouseButton::Right => {
                self.drag_anchor = if pressed { self.cursor } else { None };
                None
            }
            _ => None,
        }
    }

    /// Handles a button event the overlay consumed. Presses are dropped but a
    /// right release still ends the drag, wherever it lands.
    pub fn handle_consumed_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right && state == ElementState::Released {
            self.drag_anchor = None;
        }
    }

    /// Updates the physical window size, keeping the cursor and any drag.
    pub fn set_window_size(&mut self, window_width: u32, window_height: u32) {
        self.window_width = window_width.max(1);
        self.window_height = window_height.max(1);
    }

    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) -> Option<PointerCommand> {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        let direction = if vertical > 0.0 {
            ZoomDirection::In
        } else if vertical < 0.0 {
            ZoomDirection::Out
        } else {
            return None;
        };

        let (x, y) = self.cursor_pixel()?;

        Some(PointerCommand::Zoom { x, y, direction })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Raster pixel under the cursor, clamped to the raster.
    #[must_use]
    pub fn cursor_pixel(&self) -> Option<(i32, i32)> {
        let (x, y) = self.cursor?;
        let (rx, ry) = self.window_delta_to_raster(x, y);

        let px = (rx.floor() as i64).clamp(0, i64::from(self.raster_width) - 1);
        let py = (ry.floor() as i64).clamp(0, i64::from(self.raster_height) - 1);

        Some((px as i32, py as i32))
    }

    fn window_delta_to_raster(&self, dx: f64, dy: f64) -> (f64, f64) {
        (
            dx * f64::from(self.raster_width) / f64::from(self.window_width),
            dy * f64::from(self.raster_height) / f64::from(self.window_height),
        )
    }
}
