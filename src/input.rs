use egui::{Context, Pos2, Rect, Response};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the top-left corner of the canvas
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Primary-button pointer events, translated into canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed over the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while the button is held
    PointerMove { location: InputLocation },
    /// Button released, possibly outside the canvas
    PointerUp { location: InputLocation },
}

/// Translate a screen position into a location on the canvas at `canvas_rect`
pub fn to_canvas_location(canvas_rect: Rect, screen_pos: Pos2) -> InputLocation {
    InputLocation {
        position: (screen_pos - canvas_rect.min).to_pos2(),
        is_in_canvas: canvas_rect.contains(screen_pos),
    }
}

/// Handles converting raw egui input into canvas pointer events.
///
/// A gesture only starts on a press over the canvas widget. Once started it
/// keeps reporting moves and the release even when the pointer leaves the
/// canvas, so a drag past the edge still finishes cleanly.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pointer_held: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's input for the canvas widget behind `response`
    pub fn process_input(&mut self, ctx: &Context, response: &Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let hovered = response.hovered();

        ctx.input(|input| {
            // A touch ends with the release and `PointerGone` in the same
            // frame, so the position may already be gone here.
            let pos = input.pointer.latest_pos();

            if let Some(pos) = pos {
                let location = to_canvas_location(rect, pos);
                if input.pointer.primary_pressed() && hovered && location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                    self.pointer_held = true;
                    self.last_pointer_pos = Some(pos);
                } else if self.pointer_held && Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pointer_held && input.pointer.primary_released() {
                if let Some(pos) = pos.or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp {
                        location: to_canvas_location(rect, pos),
                    });
                }
                self.pointer_held = false;
                self.last_pointer_pos = None;
            }
        });

        events
    }
}
