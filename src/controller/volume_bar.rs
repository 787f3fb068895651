use egui::{Pos2, Rect};
use log::debug;

use super::drag::{filled_rect, track_fraction, DragSession};
use crate::view::{ControlsView, Icon};
use crate::{MediaElement, PlayerHost};

/// Volumes below this show the low volume icon.
const LOW_VOLUME: u8 = 50;

/// Volume track and mute button.
#[derive(Debug, Default)]
pub struct VolumeBar {
    drag: Option<DragSession>,
}

/// Round a requested volume to the nearest whole percent and clamp it to
/// `0..=100`. NaN counts as silence.
pub(crate) fn clamp_volume(val: f64) -> u8 {
    if val.is_nan() {
        return 0;
    }
    val.round().clamp(0., 100.) as u8
}

impl VolumeBar {
    /// Whether a volume drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply a volume in percent, rounded to the nearest whole percent and
    /// clamped. Mutes at zero. Returns the stored volume.
    pub fn set_volume(
        &self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        val: f64,
    ) -> u8 {
        let val = clamp_volume(val);
        debug!("Volume change to {}", val);

        let media = host.media_mut();
        if val == 0 {
            media.set_muted(true);
            view.volume_icon = Icon::Mute;
            view.volume_fill = 0;
        } else {
            media.set_muted(false);
            media.set_volume(val as f64 / 100.);
            view.volume_fill = val;
            view.volume_icon = if val < LOW_VOLUME {
                Icon::VolumeLow
            } else {
                Icon::VolumeHigh
            };
        }
        host.set_volume(val);
        host.notice(&format!("Volume {}", val));
        host.set_volume_text(val);
        val
    }

    /// Volume button: unmute to whatever the element kept, or mute.
    pub fn toggle_mute(&self, view: &mut ControlsView, host: &mut impl PlayerHost) -> u8 {
        let media = host.media();
        if media.muted() {
            let restore = media.volume() * 100.;
            self.set_volume(view, host, restore)
        } else {
            self.set_volume(view, host, 0.)
        }
    }

    /// Pointer pressed on the track. Applies straight away, and starts a drag
    /// when the press landed on the fill.
    pub fn press(
        &mut self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        track: Rect,
        pos: Pos2,
    ) {
        let on_thumb = filled_rect(track, view.volume_fill as f32 / 100.).contains(pos);
        let Some(val) = self.apply(view, host, track, pos) else {
            return;
        };
        if on_thumb {
            debug!("Volume drag started at {}", val);
            self.drag = Some(DragSession::begin(val as f64));
        }
    }

    /// Pointer moved while the drag is active, anywhere over the widget.
    pub fn drag_to(
        &mut self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        track: Rect,
        pos: Pos2,
    ) {
        if self.drag.is_none() {
            return;
        }
        if let Some(val) = self.apply(view, host, track, pos) {
            if let Some(d) = self.drag.as_mut() {
                d.update(val as f64);
            }
        }
    }

    /// End the drag, returning it if one was active.
    pub fn release(&mut self) -> Option<DragSession> {
        let d = self.drag.take();
        if let Some(d) = &d {
            debug!("Volume drag stopped at {}", d.current);
        }
        d
    }

    fn apply(
        &self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        track: Rect,
        pos: Pos2,
    ) -> Option<u8> {
        // not clamped here, set_volume does it
        let frac = track_fraction(track, pos)?;
        Some(self.set_volume(view, host, frac * 100.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;
    use egui::pos2;

    fn track() -> Rect {
        Rect::from_min_max(pos2(0., 0.), pos2(100., 8.))
    }

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-20.), 0);
        assert_eq!(clamp_volume(0.), 0);
        assert_eq!(clamp_volume(42.4), 42);
        assert_eq!(clamp_volume(42.6), 43);
        assert_eq!(clamp_volume(250.), 100);
        assert_eq!(clamp_volume(f64::NAN), 0);
    }

    #[test]
    fn test_set_volume_zero_mutes() {
        for v in [0., -1., -500.] {
            let mut host = FakePlayer::with_duration(10.);
            let mut view = ControlsView::default();
            let bar = VolumeBar::default();
            assert_eq!(bar.set_volume(&mut view, &mut host, v), 0);
            assert!(host.media.muted);
            assert_eq!(view.volume_width(), "0%");
            assert_eq!(view.volume_icon, Icon::Mute);
            // element keeps its previous level
            assert_eq!(host.media.volume, 1.0);
            assert_eq!(host.volume, 0);
        }
    }

    #[test]
    fn test_set_volume_icons() {
        let mut host = FakePlayer::with_duration(10.);
        let mut view = ControlsView::default();
        let bar = VolumeBar::default();

        bar.set_volume(&mut view, &mut host, 30.);
        assert_eq!(view.volume_icon, Icon::VolumeLow);
        assert_eq!(host.media.volume, 0.3);
        assert!(!host.media.muted);

        bar.set_volume(&mut view, &mut host, 50.);
        assert_eq!(view.volume_icon, Icon::VolumeHigh);

        bar.set_volume(&mut view, &mut host, 180.);
        assert_eq!(view.volume_width(), "100%");
        assert_eq!(host.volume, 100);
        assert_eq!(host.volume_text, Some(100));
        assert_eq!(host.notices.last().unwrap(), "Volume 100");
    }

    #[test]
    fn test_click_on_track() {
        let mut host = FakePlayer::with_duration(10.);
        let mut view = ControlsView::default();
        view.volume_fill = 10;
        let mut bar = VolumeBar::default();

        bar.press(&mut view, &mut host, track(), pos2(73., 4.));
        assert_eq!(host.volume, 73);
        assert_eq!(view.volume_width(), "73%");
        assert_eq!(view.volume_icon, Icon::VolumeHigh);
        assert!(!bar.is_dragging());

        // beyond the right edge is clamped by set_volume
        bar.press(&mut view, &mut host, track(), pos2(140., 4.));
        assert_eq!(host.volume, 100);
    }

    #[test]
    fn test_drag_from_fill() {
        let mut host = FakePlayer::with_duration(10.);
        let mut view = ControlsView::default();
        view.volume_fill = 80;
        let mut bar = VolumeBar::default();

        bar.press(&mut view, &mut host, track(), pos2(60., 4.));
        assert!(bar.is_dragging());
        bar.drag_to(&mut view, &mut host, track(), pos2(20., 90.));
        bar.drag_to(&mut view, &mut host, track(), pos2(-20., 90.));
        assert_eq!(host.volume, 0);
        assert!(host.media.muted);

        let session = bar.release().unwrap();
        assert_eq!(session.start, 60.);
        assert_eq!(session.current, 0.);
        assert!(!bar.is_dragging());
    }

    #[test]
    fn test_toggle_mute_restores_element_volume() {
        let mut host = FakePlayer::with_duration(10.);
        let mut view = ControlsView::default();
        let bar = VolumeBar::default();

        bar.set_volume(&mut view, &mut host, 64.);
        assert_eq!(bar.toggle_mute(&mut view, &mut host), 0);
        assert!(host.media.muted);
        assert_eq!(bar.toggle_mute(&mut view, &mut host), 64);
        assert!(!host.media.muted);
        assert_eq!(view.volume_fill, 64);
    }
}
