use std::time::{Duration, Instant};

use log::debug;

use crate::view::ControlsView;
use crate::{MediaElement, ReadyState};

/// Keeps the buffering spinner up until the element has data to play through.
#[derive(Debug, Default)]
pub struct WaitingWatchdog {
    next_poll: Option<Instant>,
}

impl WaitingWatchdog {
    /// Whether a poll is scheduled.
    pub fn is_active(&self) -> bool {
        self.next_poll.is_some()
    }

    /// When the next ready state check is due.
    pub fn next_poll(&self) -> Option<Instant> {
        self.next_poll
    }

    /// Playback stalled. Restarts the poll if one is already running.
    pub fn start(&mut self, view: &mut ControlsView, now: Instant, interval: Duration) {
        debug!("Video loading..");
        view.waiting = true;
        self.next_poll = Some(now + interval);
    }

    /// Check the ready state if a poll is due.
    pub fn poll(
        &mut self,
        view: &mut ControlsView,
        media: &impl MediaElement,
        now: Instant,
        interval: Duration,
    ) {
        let Some(due) = self.next_poll else {
            return;
        };
        if due > now {
            return;
        }
        if media.ready_state() > ReadyState::HaveFutureData {
            self.clear(view);
        } else {
            self.next_poll = Some(now + interval);
        }
    }

    /// Drop the spinner and stop polling.
    pub fn clear(&mut self, view: &mut ControlsView) {
        if self.next_poll.take().is_some() {
            debug!("Video loaded");
        }
        view.waiting = false;
    }

    /// Stop polling without touching the spinner.
    pub fn cancel(&mut self) {
        self.next_poll = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMedia;

    const POLL: Duration = Duration::from_millis(300);

    #[test]
    fn test_clears_on_poll_once_ready() {
        let mut media = FakeMedia::default();
        let mut view = ControlsView::default();
        let mut w = WaitingWatchdog::default();
        let t0 = Instant::now();

        w.start(&mut view, t0, POLL);
        assert!(view.waiting);

        media.ready_state = ReadyState::HaveFutureData;
        w.poll(&mut view, &media, t0 + POLL, POLL);
        assert!(view.waiting);
        assert_eq!(w.next_poll(), Some(t0 + POLL * 2));

        media.ready_state = ReadyState::HaveEnoughData;
        w.poll(&mut view, &media, t0 + Duration::from_millis(450), POLL);
        assert!(view.waiting, "not due yet");
        w.poll(&mut view, &media, t0 + POLL * 2, POLL);
        assert!(!view.waiting);
        assert!(!w.is_active());
    }

    #[test]
    fn test_can_play_clears_immediately() {
        let mut view = ControlsView::default();
        let mut w = WaitingWatchdog::default();
        w.start(&mut view, Instant::now(), POLL);
        w.clear(&mut view);
        assert!(!view.waiting);
        assert!(!w.is_active());
        // clear without a poll is harmless
        w.clear(&mut view);
    }

    #[test]
    fn test_restart_replaces_poll() {
        let mut view = ControlsView::default();
        let mut w = WaitingWatchdog::default();
        let t0 = Instant::now();
        w.start(&mut view, t0, POLL);
        w.start(&mut view, t0 + POLL, POLL);
        assert_eq!(w.next_poll(), Some(t0 + POLL * 2));
        w.cancel();
        assert!(!w.is_active());
    }
}
