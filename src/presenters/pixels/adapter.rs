use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::marker::events::MarkerEvent;
use crate::controllers::marker::ports::MarkerPresenterPort;
use crate::input::gui::app::events::GuiEvent;

/// Pending events kept between two redraws; older ones are dropped first.
const MAX_PENDING_EVENTS: usize = 64;

/// Receives marker events on the listener thread and hands them to the
/// event-loop thread, waking it so the next redraw picks them up.
pub struct PixelsAdapter {
    pending: Mutex<VecDeque<MarkerEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl MarkerPresenterPort for PixelsAdapter {
    fn present(&self, event: MarkerEvent) {
        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            push_bounded(&mut pending, event, MAX_PENDING_EVENTS);
        }

        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(MAX_PENDING_EVENTS)),
            event_loop_proxy,
        }
    }

    pub fn take_events(&self) -> Vec<MarkerEvent> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.drain(..).collect()
    }
}

fn push_bounded(queue: &mut VecDeque<MarkerEvent>, event: MarkerEvent, capacity: usize) {
    while queue.len() >= capacity {
        queue.pop_front();
    }
    queue.push_back(event);
}
