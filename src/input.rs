use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Input events in canvas-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved, pressed or not
    PointerMove { pos: Pos2 },
    /// Primary button released after a press that started in the canvas
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas while no button was held
    PointerLeave,
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into canvas-local `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// A press started inside the canvas and has not been released yet
    dragging: bool,
    hovering: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's raw input against the canvas at `canvas_rect`
    /// (screen coordinates).
    ///
    /// `over_canvas` must come from the canvas widget's response
    /// (`Response::contains_pointer`), so that windows layered above the
    /// canvas swallow presses instead of starting a gesture.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        over_canvas: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        ctx.input(|input| {
            let pos = input.pointer.hover_pos();
            let inside = over_canvas && pos.is_some_and(|p| canvas_rect.contains(p));

            let mut pressed = false;
            if input.pointer.button_pressed(PointerButton::Primary) && inside {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerDown { pos: to_local(pos) });
                    self.dragging = true;
                    pressed = true;
                }
            }

            // The press already recorded this position.
            if let Some(pos) = pos.filter(|_| !pressed) {
                if Some(pos) != self.last_pointer_pos && (inside || self.dragging) {
                    events.push(InputEvent::PointerMove { pos: to_local(pos) });
                }
            }

            if input.pointer.button_released(PointerButton::Primary) && self.dragging {
                let last = pos.or(self.last_pointer_pos).unwrap_or(canvas_rect.min);
                events.push(InputEvent::PointerUp { pos: to_local(last) });
                self.dragging = false;
            }

            if self.hovering && !inside && !self.dragging {
                events.push(InputEvent::PointerLeave);
            }
            self.hovering = inside;
            self.last_pointer_pos = pos;

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
