use egui::{Pos2, Rect};

use crate::path::Point;

/// Pointer events understood by the signature pad, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed: a stroke begins
    Down(Point),
    /// Pointer dragged while pressed
    Move(Point),
    /// Pointer released: the stroke ends
    Up,
}

/// Phase of the pointer as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    Pressed,
    Dragged,
    Released,
}

/// Handles converting raw egui pointer input into [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to surface-local point
    pub fn to_local(&self, pos: Pos2) -> Point {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Translate one pointer phase into at most one pad event
    pub fn translate(&mut self, phase: PointerPhase, pos: Option<Pos2>) -> Option<InputEvent> {
        match phase {
            PointerPhase::Pressed => {
                let pos = pos?;
                self.pressed = true;
                self.last_pointer_pos = Some(pos);
                Some(InputEvent::Down(self.to_local(pos)))
            }
            PointerPhase::Dragged => {
                let pos = pos?;
                if !self.pressed {
                    // We missed the press, treat the first drag as one
                    return self.translate(PointerPhase::Pressed, Some(pos));
                }
                if self.last_pointer_pos == Some(pos) {
                    return None;
                }
                self.last_pointer_pos = Some(pos);
                Some(InputEvent::Move(self.to_local(pos)))
            }
            PointerPhase::Released => {
                if !self.pressed {
                    return None;
                }
                self.pressed = false;
                self.last_pointer_pos = None;
                Some(InputEvent::Up)
            }
        }
    }

    /// Process the response of a drag-sensing canvas widget
    pub fn process_response(&mut self, response: &egui::Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = response.interact_pointer_pos();

        if response.drag_started() {
            // Begin where the press happened, not where the drag was recognized
            let origin = response.ctx.input(|i| i.pointer.press_origin()).or(pos);
            events.extend(self.translate(PointerPhase::Pressed, origin));
            events.extend(self.translate(PointerPhase::Dragged, pos));
        } else if response.dragged() {
            events.extend(self.translate(PointerPhase::Dragged, pos));
        }

        if response.drag_stopped() {
            events.extend(self.translate(PointerPhase::Released, pos));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(Pos2::new(100.0, 50.0), Pos2::new(400.0, 250.0)))
    }

    #[test]
    fn test_positions_become_surface_local() {
        let mut input = handler();
        assert_eq!(
            input.translate(PointerPhase::Pressed, Some(Pos2::new(110.0, 70.0))),
            Some(InputEvent::Down(Point::new(10.0, 20.0)))
        );
    }

    #[test]
    fn test_press_drag_release_sequence() {
        let mut input = handler();
        input.translate(PointerPhase::Pressed, Some(Pos2::new(100.0, 50.0)));

        assert_eq!(
            input.translate(PointerPhase::Dragged, Some(Pos2::new(105.0, 50.0))),
            Some(InputEvent::Move(Point::new(5.0, 0.0)))
        );
        // Same position twice is not a move
        assert_eq!(input.translate(PointerPhase::Dragged, Some(Pos2::new(105.0, 50.0))), None);
        assert_eq!(input.translate(PointerPhase::Released, None), Some(InputEvent::Up));
        assert_eq!(input.translate(PointerPhase::Released, None), None);
    }

    #[test]
    fn test_drag_without_press_starts_stroke() {
        let mut input = handler();
        assert_eq!(
            input.translate(PointerPhase::Dragged, Some(Pos2::new(120.0, 60.0))),
            Some(InputEvent::Down(Point::new(20.0, 10.0)))
        );
    }
}
