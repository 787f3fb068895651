//! Plain data the overlay paints, filled in by the [`Controller`](crate::Controller).

use std::fmt;

/// A width or offset expressed as a percentage of its track.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug, Default)]
pub struct Percent(pub f64);

impl Percent {
    /// Percentage of a `0..=1` fraction, rounded to two decimals.
    pub fn from_fraction(frac: f64) -> Self {
        Self((frac * 10_000.).round() / 100.)
    }

    /// The value as a `0..=1` fraction, for painting.
    pub fn fraction(&self) -> f32 {
        (self.0 / 100.) as f32
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Glyphs shown on the control buttons.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Icon {
    /// Paused, click to play.
    Play,
    /// Playing, click to pause.
    Pause,
    /// Muted.
    Mute,
    /// Volume below half.
    VolumeLow,
    /// Volume at half or above.
    VolumeHigh,
}

impl Icon {
    /// Text painted for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Play => "▶",
            Icon::Pause => "⏸",
            Icon::Mute => "🔇",
            Icon::VolumeLow => "🔉",
            Icon::VolumeHigh => "🔊",
        }
    }
}

/// Cursor shown over the host surface.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum CursorStyle {
    /// Whatever egui would show.
    #[default]
    Auto,
    /// No cursor, while the chrome is hidden in an expanded screen mode.
    None,
}

/// Which page of the settings menu is visible.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum SettingsPage {
    /// Speed, mirror, loop, hotkey and light entries.
    #[default]
    Group,
    /// The playback rate list.
    PlaybackSpeed,
}

/// Everything the overlay paints, kept as plain data so the controller can be
/// driven and inspected without a renderer.
#[derive(Clone, Debug)]
pub struct ControlsView {
    /// Play button glyph.
    pub play_icon: Icon,
    /// Volume button glyph.
    pub volume_icon: Icon,

    /// Buffered part of the seek track.
    pub loaded: Percent,
    /// Played part of the seek track.
    pub played: Percent,
    /// Fill under the pointer while hovering the seek track.
    pub hover: Percent,
    /// Left offset of the hover time tooltip.
    pub tooltip_left: Percent,
    /// Time under the pointer while hovering the seek track.
    pub tooltip_text: String,

    /// Volume fill, in whole percent.
    pub volume_fill: u8,

    /// Current position as `MM:SS`.
    pub time_current: String,
    /// Duration as `MM:SS`.
    pub time_duration: String,

    /// Chrome is concealed.
    pub hidden: bool,
    /// Buffering spinner is shown.
    pub waiting: bool,
    /// Cursor over the surface.
    pub cursor: CursorStyle,
    /// The settings menu checkbox.
    pub settings_open: bool,
    /// Page shown while the settings menu is open.
    pub settings_page: SettingsPage,

    /// Active playback rate in the speed box.
    pub speed: f32,
    /// Video is flipped horizontally.
    pub mirrored: bool,
    /// State of the loop entry.
    pub loop_label: &'static str,
    /// State of the mirror entry.
    pub mirror_label: &'static str,
    /// State of the hotkey entry.
    pub hotkey_label: &'static str,
    /// Text of the light entry, which names the action it performs.
    pub light_label: &'static str,
}

impl Default for ControlsView {
    fn default() -> Self {
        Self {
            play_icon: Icon::Play,
            volume_icon: Icon::VolumeHigh,
            loaded: Percent::default(),
            played: Percent::default(),
            hover: Percent::default(),
            tooltip_left: Percent::default(),
            tooltip_text: String::new(),
            volume_fill: 100,
            time_current: "00:00".to_owned(),
            time_duration: "00:00".to_owned(),
            hidden: false,
            waiting: false,
            cursor: CursorStyle::Auto,
            settings_open: false,
            settings_page: SettingsPage::Group,
            speed: 1.0,
            mirrored: false,
            loop_label: OFF,
            mirror_label: OFF,
            hotkey_label: OFF,
            light_label: LIGHTS_ON,
        }
    }
}

impl ControlsView {
    /// Volume fill formatted as a width.
    pub fn volume_width(&self) -> String {
        format!("{}%", self.volume_fill)
    }
}

pub(crate) const ON: &str = "On";
pub(crate) const OFF: &str = "Off";
pub(crate) const LIGHTS_ON: &str = "Lights on";
pub(crate) const LIGHTS_OFF: &str = "Lights off";

pub(crate) fn on_off(on: bool) -> &'static str {
    if on {
        ON
    } else {
        OFF
    }
}
