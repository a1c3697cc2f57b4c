// Typed notification interface for gesture consumers.
use crate::model::{GestureEvent, GesturePhase};

pub trait GestureSink {
    fn on_start(&mut self, event: &GestureEvent);
    fn on_change(&mut self, event: &GestureEvent);
    fn on_end(&mut self, event: &GestureEvent);
}

/// Adapts a closure receiving every phase into a [`GestureSink`].
pub struct FnSink<F: FnMut(GesturePhase, &GestureEvent)>(pub F);

impl<F: FnMut(GesturePhase, &GestureEvent)> GestureSink for FnSink<F> {
    fn on_start(&mut self, event: &GestureEvent) {
        (self.0)(GesturePhase::Start, event)
    }

    fn on_change(&mut self, event: &GestureEvent) {
        (self.0)(GesturePhase::Change, event)
    }

    fn on_end(&mut self, event: &GestureEvent) {
        (self.0)(GesturePhase::End, event)
    }
}
