/// The possible playback states tracked by a [`Controller`](crate::Controller).
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum PlayStatus {
    /// Nothing has been confirmed by the media element yet.
    #[default]
    Loading,
    /// Playback is ongoing.
    Play,
    /// Playback is paused, or the stream reached its end.
    Pause,
}

/// How much media data the element has available, mirroring `HTMLMediaElement.readyState`.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default)]
pub enum ReadyState {
    /// No information about the media.
    #[default]
    HaveNothing = 0,
    /// Duration and dimensions are known.
    HaveMetadata = 1,
    /// Data for the current position only.
    HaveCurrentData = 2,
    /// Data for the current and at least the next frame.
    HaveFutureData = 3,
    /// Enough data to play through without stalling.
    HaveEnoughData = 4,
}

/// Screen mode reported by the host player.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum ScreenMode {
    /// Embedded in the page or window.
    #[default]
    Normal,
    /// Expanded to fill the window.
    Web,
    /// Native fullscreen.
    Full,
}

impl ScreenMode {
    /// Any mode that takes over more than the widget's own box.
    pub fn is_expanded(&self) -> bool {
        !matches!(self, ScreenMode::Normal)
    }
}

/// Notifications sent to the host player's event bus.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum PlayerEvent {
    /// The media reached its end.
    Ended,
    /// The light toggle changed.
    Light(bool),
}

/// Native signals emitted by the media element.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MediaEvent {
    /// Playback actually started.
    Play,
    /// Playback actually paused.
    Pause,
    /// Periodic progress tick.
    TimeUpdate,
    /// Media reached its end.
    Ended,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data is available to resume.
    CanPlay,
    /// The video surface was clicked.
    Click,
}

/// The underlying media element whose state the controls reflect.
pub trait MediaElement {
    /// Total length in seconds. May be zero or NaN before metadata is loaded.
    fn duration(&self) -> f64;
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// End of the last buffered range in seconds, if anything is buffered.
    fn buffered_end(&self) -> Option<f64>;
    /// How much data is available at the current position.
    fn ready_state(&self) -> ReadyState;
    /// Whether any range of the media has been played.
    fn has_played(&self) -> bool;
    /// Whether audio is muted.
    fn muted(&self) -> bool;
    /// Mute or unmute without touching the volume.
    fn set_muted(&mut self, muted: bool);
    /// Volume as a fraction in `0.0..=1.0`.
    fn volume(&self) -> f64;
    /// Set the volume as a fraction in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);
    /// Whether playback restarts at the end.
    fn looping(&self) -> bool;
    /// Turn looping on or off.
    fn set_looping(&mut self, looping: bool);
}

/// The player that embeds the controls. It owns the media element, the notice
/// toast, the info panel and the event bus.
pub trait PlayerHost {
    /// Media element type owned by the player.
    type Media: MediaElement;

    /// The media element.
    fn media(&self) -> &Self::Media;
    /// The media element, mutably.
    fn media_mut(&mut self) -> &mut Self::Media;

    /// Request playback. The controller waits for [`MediaEvent::Play`] before changing state.
    fn play(&mut self);
    /// Request a pause. The controller waits for [`MediaEvent::Pause`] before changing state.
    fn pause(&mut self);
    /// Switch to the secondary source.
    fn next(&mut self);
    /// Whether a secondary source is configured.
    fn has_next_source(&self) -> bool;

    /// Current position in seconds.
    fn position(&self) -> f64;
    /// Seek to `time` seconds.
    fn seek(&mut self, time: f64);
    /// Change the playback rate, `1.0` being normal speed.
    fn set_playback_rate(&mut self, rate: f32);
    /// Update the stats display with a confirmed status.
    fn show_stats(&mut self, status: PlayStatus);

    /// Current screen mode.
    fn screen_mode(&self) -> ScreenMode;
    /// Whether the context menu is currently open.
    fn menu_shown(&self) -> bool;

    /// Player level volume in percent.
    fn volume(&self) -> u8;
    /// Store the player level volume in percent.
    fn set_volume(&mut self, volume: u8);

    /// Show a transient notice that hides itself.
    fn notice(&mut self, text: &str);
    /// Update the volume line in the info panel.
    fn set_volume_text(&mut self, volume: u8);
    /// Emit an event on the player's event bus.
    fn dispatch(&mut self, event: PlayerEvent);
}
