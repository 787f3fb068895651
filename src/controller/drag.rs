use egui::{Pos2, Rect};

/// One pointer-down to pointer-up interaction with a slider.
/// Values are whatever the slider applies: a seek fraction or a volume percent.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct DragSession {
    /// Value where the press landed.
    pub start: f64,
    /// Last value applied.
    pub current: f64,
}

impl DragSession {
    /// Start a session at `value`.
    pub fn begin(value: f64) -> Self {
        Self {
            start: value,
            current: value,
        }
    }

    /// Record the latest value.
    pub fn update(&mut self, value: f64) {
        self.current = value;
    }
}

/// Horizontal position of `pos` along `track` as an unclamped fraction.
/// `None` when the track has no width yet.
pub(crate) fn track_fraction(track: Rect, pos: Pos2) -> Option<f64> {
    let width = track.width();
    if !(width > 0.) {
        return None;
    }
    Some(((pos.x - track.left()) / width) as f64)
}

/// The filled part of a track, from its left edge up to `frac`.
pub(crate) fn filled_rect(track: Rect, frac: f32) -> Rect {
    let mut r = track;
    r.set_right(track.left() + track.width() * frac.clamp(0., 1.));
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_track_fraction() {
        let track = Rect::from_min_max(pos2(100., 0.), pos2(300., 10.));
        assert_eq!(track_fraction(track, pos2(200., 5.)), Some(0.5));
        assert_eq!(track_fraction(track, pos2(50., 5.)), Some(-0.25));
        assert_eq!(track_fraction(Rect::NOTHING, pos2(50., 5.)), None);
    }

    #[test]
    fn test_session() {
        let mut s = DragSession::begin(0.2);
        s.update(0.6);
        assert_eq!(s.start, 0.2);
        assert_eq!(s.current, 0.6);
    }

    #[test]
    fn test_filled_rect() {
        let track = Rect::from_min_max(pos2(0., 0.), pos2(200., 10.));
        assert_eq!(filled_rect(track, 0.25).right(), 50.);
        assert_eq!(filled_rect(track, 2.0).right(), 200.);
    }
}
