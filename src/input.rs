use egui::{Context, Pos2, Rect};

/// Pointer events in canvas coordinates (origin at the canvas' top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the primary button is held
    PointerMove { position: Pos2 },
    /// Primary button was released, anywhere
    PointerUp { position: Pos2 },
}

/// Handles converting raw egui input into canvas pointer events
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// A press started on the canvas and has not been released yet
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Feed one frame of raw pointer state.
    ///
    /// Presses only count when they start inside the canvas while the canvas
    /// is the topmost thing under the pointer (`canvas_hovered`); a press on
    /// a popup or window floating over the canvas is not a canvas press.
    /// Releases are always reported for a canvas press, even when the pointer
    /// has left the canvas, so a gesture can never be left dangling.
    pub fn process_pointer(
        &mut self,
        pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_hovered: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pos = pos.or(self.last_pointer_pos);

        if pressed {
            if let Some(pos) = pos.filter(|p| canvas_hovered && self.canvas_rect.contains(*p)) {
                self.pressed_on_canvas = true;
                events.push(InputEvent::PointerDown {
                    position: self.to_canvas(pos),
                });
            }
        } else if self.pressed_on_canvas && pos != self.last_pointer_pos {
            if let Some(pos) = pos {
                events.push(InputEvent::PointerMove {
                    position: self.to_canvas(pos),
                });
            }
        }

        if released && self.pressed_on_canvas {
            self.pressed_on_canvas = false;
            let position = pos.map(|p| self.to_canvas(p)).unwrap_or_default();
            events.push(InputEvent::PointerUp { position });
        }

        self.last_pointer_pos = pos;
        events
    }

    /// Process raw egui input and generate our InputEvents. `canvas_hovered`
    /// is whether the canvas widget has the pointer this frame.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let (pos, pressed, released) = ctx.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        self.process_pointer(pos, pressed, released, canvas_hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(0.0, 50.0), egui::vec2(200.0, 100.0)))
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        assert!(handler.process_pointer(Some(Pos2::new(10.0, 10.0)), true, false, true).is_empty());
        assert!(handler.process_pointer(Some(Pos2::new(20.0, 60.0)), false, false, true).is_empty());
        assert!(handler.process_pointer(Some(Pos2::new(20.0, 60.0)), false, true, true).is_empty());
    }

    #[test]
    fn test_press_on_overlay_above_canvas_is_ignored() {
        let mut handler = handler();
        // Inside the canvas rect, but something else is on top
        assert!(handler.process_pointer(Some(Pos2::new(60.0, 80.0)), true, false, false).is_empty());
        assert!(handler.process_pointer(Some(Pos2::new(90.0, 90.0)), false, false, true).is_empty());
        assert!(handler.process_pointer(Some(Pos2::new(90.0, 90.0)), false, true, true).is_empty());

        // The next press on the uncovered canvas starts normally
        assert_eq!(
            handler.process_pointer(Some(Pos2::new(60.0, 80.0)), true, false, true),
            vec![InputEvent::PointerDown {
                position: Pos2::new(60.0, 30.0)
            }]
        );
    }

    #[test]
    fn test_drag_sequence_in_canvas_coordinates() {
        let mut handler = handler();
        assert_eq!(
            handler.process_pointer(Some(Pos2::new(10.0, 60.0)), true, false, true),
            vec![InputEvent::PointerDown {
                position: Pos2::new(10.0, 10.0)
            }]
        );
        assert_eq!(
            handler.process_pointer(Some(Pos2::new(30.0, 80.0)), false, false, true),
            vec![InputEvent::PointerMove {
                position: Pos2::new(30.0, 30.0)
            }]
        );
        // No movement, no event
        assert!(handler.process_pointer(Some(Pos2::new(30.0, 80.0)), false, false, true).is_empty());
        // Released outside the canvas still ends the gesture
        assert_eq!(
            handler.process_pointer(Some(Pos2::new(500.0, 500.0)), false, true, true),
            vec![
                InputEvent::PointerMove {
                    position: Pos2::new(500.0, 450.0)
                },
                InputEvent::PointerUp {
                    position: Pos2::new(500.0, 450.0)
                },
            ]
        );
    }
}
