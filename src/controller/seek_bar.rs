use egui::{Pos2, Rect};
use log::debug;

use super::drag::{filled_rect, track_fraction, DragSession};
use super::media_duration;
use crate::utils::format_time;
use crate::view::{ControlsView, Percent};
use crate::{MediaElement, PlayerHost};

/// How far around the track the hover preview still follows the pointer.
const HOVER_MARGIN: f32 = 4.;

/// Area where hovering previews a seek time. Wider than the track itself so a
/// thin track is easy to hit.
pub(crate) fn hover_rect(track: Rect) -> Rect {
    track.expand(HOVER_MARGIN)
}

/// Progress track: buffered and played fills, click and drag to seek, hover preview.
#[derive(Debug, Default)]
pub struct SeekBar {
    drag: Option<DragSession>,
}

impl SeekBar {
    /// Whether a thumb drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Recompute played and buffered widths from the media element.
    pub fn update_load_bar(&self, view: &mut ControlsView, media: &impl MediaElement) {
        let Some(duration) = media_duration(media) else {
            return;
        };
        let played = (media.current_time() / duration).clamp(0., 1.);
        let loaded = media
            .buffered_end()
            .map(|end| (end / duration).clamp(0., 1.))
            .unwrap_or(0.);
        view.played = Percent::from_fraction(played);
        view.loaded = Percent::from_fraction(loaded);
    }

    /// Empty the played fill.
    pub fn reset(&self, view: &mut ControlsView) {
        view.played = Percent(0.);
    }

    /// Pointer pressed somewhere on the track. Seeks straight away, and starts
    /// a drag when the press landed on the played fill.
    pub fn press(
        &mut self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        track: Rect,
        pos: Pos2,
    ) {
        let on_thumb = filled_rect(track, view.played.fraction()).contains(pos);
        let Some(frac) = self.seek_to(view, host, track, pos) else {
            return;
        };
        if on_thumb {
            debug!("Seek drag started at {:.3}", frac);
            self.drag = Some(DragSession::begin(frac));
        }
    }

    /// Pointer moved anywhere over the widget while the drag is active.
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
        if let Some(frac) = self.seek_to(view, host, track, pos) {
            if let Some(d) = self.drag.as_mut() {
                d.update(frac);
            }
        }
    }

    /// End the drag, returning it if one was active.
    pub fn release(&mut self) -> Option<DragSession> {
        let d = self.drag.take();
        if let Some(d) = &d {
            debug!("Seek drag stopped at {:.3}", d.current);
        }
        d
    }

    /// Hover preview: fill and tooltip only, never seeks.
    pub fn hover(
        &self,
        view: &mut ControlsView,
        media: &impl MediaElement,
        track: Rect,
        pos: Pos2,
    ) {
        let Some(duration) = media_duration(media) else {
            return;
        };
        let Some(frac) = track_fraction(track, pos) else {
            return;
        };
        let frac = frac.clamp(0., 1.);
        view.tooltip_left = Percent::from_fraction(frac);
        view.tooltip_text = format_time(frac * duration);
        view.hover = Percent::from_fraction(frac);
    }

    fn seek_to(
        &self,
        view: &mut ControlsView,
        host: &mut impl PlayerHost,
        track: Rect,
        pos: Pos2,
    ) -> Option<f64> {
        let duration = media_duration(host.media())?;
        let frac = track_fraction(track, pos)?.clamp(0., 1.);
        view.played = Percent::from_fraction(frac);
        host.seek(frac * duration);
        Some(frac)
    }
}
