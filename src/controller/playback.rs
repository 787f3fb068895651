use log::debug;

use crate::view::{ControlsView, Icon};
use crate::{PlayStatus, PlayerEvent, PlayerHost};

/// Play/pause state as confirmed by the media element, plus the progress and
/// end-of-media subscriptions that only exist while playing.
#[derive(Debug, Default)]
pub struct Playback {
    status: PlayStatus,
    progress_attached: bool,
    ended_attached: bool,
}

impl Playback {
    /// Last confirmed state.
    pub fn status(&self) -> PlayStatus {
        self.status
    }

    /// Whether progress ticks are handled.
    pub fn progress_attached(&self) -> bool {
        self.progress_attached
    }

    /// Whether end of media is handled.
    pub fn ended_attached(&self) -> bool {
        self.ended_attached
    }

    /// Ask the host to flip playback. State changes when the element confirms.
    pub fn toggle(&self, host: &mut impl PlayerHost) {
        debug!("Play status: {:?}", self.status);
        if self.status == PlayStatus::Play {
            host.pause();
        } else {
            host.play();
        }
    }

    /// The element confirmed playback started.
    pub fn on_play(&mut self, view: &mut ControlsView, host: &mut impl PlayerHost) {
        self.progress_attached = true;
        self.ended_attached = true;
        self.status = PlayStatus::Play;
        host.show_stats(PlayStatus::Play);
        view.play_icon = Icon::Pause;
    }

    /// The element confirmed it paused.
    pub fn on_pause(&mut self, view: &mut ControlsView, host: &mut impl PlayerHost) {
        self.detach();
        self.status = PlayStatus::Pause;
        host.show_stats(PlayStatus::Pause);
        view.play_icon = Icon::Play;
    }

    /// End of media. Ignored unless playback attached the handler.
    pub fn on_ended(&mut self, view: &mut ControlsView, host: &mut impl PlayerHost) -> bool {
        if !self.ended_attached {
            return false;
        }
        host.pause();
        self.status = PlayStatus::Pause;
        self.detach();
        view.play_icon = Icon::Play;
        host.dispatch(PlayerEvent::Ended);
        true
    }

    /// Drop both subscriptions.
    pub fn detach(&mut self) {
        self.progress_attached = false;
        self.ended_attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;

    #[test]
    fn test_toggle_requests_only() {
        let mut host = FakePlayer::default();
        let pb = Playback::default();
        pb.toggle(&mut host);
        assert_eq!(host.play_requests, 1);
        assert_eq!(pb.status(), PlayStatus::Loading);
        assert!(host.stats.is_empty());
    }

    #[test]
    fn test_play_pause_cycle() {
        let mut host = FakePlayer::default();
        let mut view = ControlsView::default();
        let mut pb = Playback::default();

        pb.on_play(&mut view, &mut host);
        assert_eq!(pb.status(), PlayStatus::Play);
        assert!(pb.progress_attached() && pb.ended_attached());
        assert_eq!(view.play_icon, Icon::Pause);

        pb.toggle(&mut host);
        assert_eq!(host.pause_requests, 1);

        pb.on_pause(&mut view, &mut host);
        assert_eq!(pb.status(), PlayStatus::Pause);
        assert!(!pb.progress_attached() && !pb.ended_attached());
        assert_eq!(view.play_icon, Icon::Play);
        assert_eq!(host.stats, vec![PlayStatus::Play, PlayStatus::Pause]);
    }

    #[test]
    fn test_ended() {
        let mut host = FakePlayer::default();
        let mut view = ControlsView::default();
        let mut pb = Playback::default();

        assert!(!pb.on_ended(&mut view, &mut host));
        assert!(host.events.is_empty());

        pb.on_play(&mut view, &mut host);
        assert!(pb.on_ended(&mut view, &mut host));
        assert_eq!(host.pause_requests, 1);
        assert_eq!(host.events, vec![PlayerEvent::Ended]);
        assert_eq!(pb.status(), PlayStatus::Pause);
        assert!(!pb.progress_attached());

        // handler is gone after the first end
        assert!(!pb.on_ended(&mut view, &mut host));
        assert_eq!(host.events.len(), 1);
    }
}
