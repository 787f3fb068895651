//! In-memory player and media element for tests.

use crate::{MediaElement, PlayStatus, PlayerEvent, PlayerHost, ReadyState, ScreenMode};

#[derive(Debug, Default)]
pub struct FakeMedia {
    pub duration: f64,
    pub current_time: f64,
    pub buffered_end: Option<f64>,
    pub ready_state: ReadyState,
    pub has_played: bool,
    pub muted: bool,
    pub volume: f64,
    pub looping: bool,
}

impl MediaElement for FakeMedia {
    fn duration(&self) -> f64 {
        self.duration
    }
    fn current_time(&self) -> f64 {
        self.current_time
    }
    fn buffered_end(&self) -> Option<f64> {
        self.buffered_end
    }
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }
    fn has_played(&self) -> bool {
        self.has_played
    }
    fn muted(&self) -> bool {
        self.muted
    }
    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
    fn volume(&self) -> f64 {
        self.volume
    }
    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
    fn looping(&self) -> bool {
        self.looping
    }
    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

/// Records every request the controller makes.
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub media: FakeMedia,
    pub play_requests: usize,
    pub pause_requests: usize,
    pub next_requests: usize,
    pub next_source: bool,
    pub seeks: Vec<f64>,
    pub rate: Option<f32>,
    pub stats: Vec<PlayStatus>,
    pub screen_mode: ScreenMode,
    pub menu_shown: bool,
    pub volume: u8,
    pub notices: Vec<String>,
    pub volume_text: Option<u8>,
    pub events: Vec<PlayerEvent>,
}

impl FakePlayer {
    /// A player with a clip of `duration` seconds at full volume.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            media: FakeMedia {
                duration,
                volume: 1.0,
                ..Default::default()
            },
            volume: 100,
            ..Default::default()
        }
    }
}

impl PlayerHost for FakePlayer {
    type Media = FakeMedia;

    fn media(&self) -> &FakeMedia {
        &self.media
    }
    fn media_mut(&mut self) -> &mut FakeMedia {
        &mut self.media
    }
    fn play(&mut self) {
        self.play_requests += 1;
    }
    fn pause(&mut self) {
        self.pause_requests += 1;
    }
    fn next(&mut self) {
        self.next_requests += 1;
    }
    fn has_next_source(&self) -> bool {
        self.next_source
    }
    fn position(&self) -> f64 {
        self.media.current_time
    }
    fn seek(&mut self, time: f64) {
        self.seeks.push(time);
        self.media.current_time = time;
    }
    fn set_playback_rate(&mut self, rate: f32) {
        self.rate = Some(rate);
    }
    fn show_stats(&mut self, status: PlayStatus) {
        self.stats.push(status);
    }
    fn screen_mode(&self) -> ScreenMode {
        self.screen_mode
    }
    fn menu_shown(&self) -> bool {
        self.menu_shown
    }
    fn volume(&self) -> u8 {
        self.volume
    }
    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_owned());
    }
    fn set_volume_text(&mut self, volume: u8) {
        self.volume_text = Some(volume);
    }
    fn dispatch(&mut self, event: PlayerEvent) {
        self.events.push(event);
    }
}
