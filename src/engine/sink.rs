// Wed Jan 14 2026 - Alex

use crate::engine::MatchEvent;

/// Receives match events in the order the scan produces them.
pub trait MatchSink {
    fn on_match(&mut self, event: MatchEvent);
}

impl MatchSink for Vec<MatchEvent> {
    fn on_match(&mut self, event: MatchEvent) {
        self.push(event);
    }
}

impl<S: MatchSink + ?Sized> MatchSink for &mut S {
    fn on_match(&mut self, event: MatchEvent) {
        (**self).on_match(event);
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(MatchEvent)> MatchSink for FnSink<F> {
    fn on_match(&mut self, event: MatchEvent) {
        (self.0)(event);
    }
}
