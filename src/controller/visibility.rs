use std::time::{Duration, Instant};

use crate::utils::FrameRequest;
use crate::view::{ControlsView, CursorStyle};
use crate::{MediaElement, PlayStatus, PlayerHost};

/// Shows the chrome on activity and conceals it after a period of inactivity.
#[derive(Debug, Default)]
pub struct AutoHide {
    shown: bool,
    hide_at: Option<Instant>,
    frame: FrameRequest,
}

impl AutoHide {
    /// Whether the chrome was revealed and not hidden since.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// When the armed hide fires.
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Whether an arm waits for the next frame.
    pub fn frame_pending(&self) -> bool {
        self.frame.is_pending()
    }

    /// Arm on the next frame. Bursts of activity within a frame collapse into one.
    pub fn request(&mut self) {
        self.frame.request();
    }

    /// Runs once per frame: performs a pending arm, then fires an expired hide.
    pub fn on_frame(
        &mut self,
        view: &mut ControlsView,
        host: &impl PlayerHost,
        status: PlayStatus,
        now: Instant,
        delay: Duration,
    ) {
        if self.frame.take() {
            self.show(view);
            self.hide_at = Some(now + delay);
        }
        if self.hide_at.is_some_and(|t| t <= now) {
            self.hide_at = None;
            if host.media().has_played() && status != PlayStatus::Pause {
                self.hide(view, host);
            }
        }
    }

    /// Reveal the chrome and restore the cursor.
    pub fn show(&mut self, view: &mut ControlsView) {
        self.shown = true;
        view.hidden = false;
        view.cursor = CursorStyle::Auto;
    }

    /// Conceal the chrome and force the settings menu closed. The cursor is
    /// only hidden in web and full screen modes.
    pub fn hide(&mut self, view: &mut ControlsView, host: &impl PlayerHost) {
        self.shown = false;
        view.hidden = true;
        view.settings_open = false;
        if host.screen_mode().is_expanded() {
            view.cursor = CursorStyle::None;
        }
    }

    /// Drop the pending arm and the hide deadline.
    pub fn cancel(&mut self) {
        self.hide_at = None;
        self.frame.cancel();
    }
}
