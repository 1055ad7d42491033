/// Host events the runner understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to page coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The cursor left the page (or the host has no pointer).
    PointerLeave,
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS pushes events as they arrive; the runner drains them once per frame,
/// in arrival order, before stepping.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerLeave);
        q.push(InputEvent::Resize { width: 1024.0, height: 768.0 });
        assert_eq!(q.len(), 3);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerMove { x: 10.0, y: 20.0 });
        assert_eq!(events[1], InputEvent::PointerLeave);
        assert!(q.is_empty());
    }
}
