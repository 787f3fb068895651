//! The interactive control surface of a player.
//!
//! A [`Controller`] never owns the player it controls. Every call that needs
//! the player or its media element takes it as `&mut impl PlayerHost`, and every
//! call that can arm or fire a timer takes the current [`Instant`]. Timers are
//! deadlines checked by [`Controller::update`], which the host runs once per frame.

use std::time::Instant;

use egui::{Key, Pos2, Rect};
use log::{debug, info};

use crate::utils::format_time;
use crate::view::ControlsView;
use crate::{ControllerOptions, MediaElement, MediaEvent, PlayStatus, PlayerHost};

mod drag;
mod hotkeys;
mod playback;
mod seek_bar;
mod settings;
mod visibility;
mod volume_bar;
mod waiting;

pub use drag::DragSession;
pub(crate) use drag::filled_rect;
pub use hotkeys::{HotkeyAction, HotkeyBinding, Hotkeys, HOTKEYS};
pub use playback::Playback;
pub(crate) use seek_bar::hover_rect;
pub use seek_bar::SeekBar;
pub(crate) use settings::menu_row_rect;
pub use settings::{SettingsItem, SETTINGS_ITEMS};
pub use visibility::AutoHide;
pub use volume_bar::VolumeBar;
pub use waiting::WaitingWatchdog;

/// Duration of the media if it is usable as a divisor.
pub(crate) fn media_duration(media: &impl MediaElement) -> Option<f64> {
    let d = media.duration();
    (d.is_finite() && d > 0.).then_some(d)
}

/// Screen rectangles of the interactive parts, in the same space as pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsLayout {
    /// The whole widget. Drags are tracked anywhere inside it.
    pub surface: Rect,
    /// Progress track. Presses seek, hovering a little around it previews.
    pub seek_track: Rect,
    /// Volume track.
    pub volume_track: Rect,
    /// Play/pause toggle.
    pub play_button: Rect,
    /// Mute toggle next to the volume track.
    pub volume_button: Rect,
    /// Switch to the secondary source. Ignored when the player has none.
    pub next_button: Rect,
    /// Opens and closes the settings menu.
    pub settings_button: Rect,
    /// The open settings menu, split into equal rows for the visible page.
    pub settings_menu: Rect,
}

impl Default for ControlsLayout {
    fn default() -> Self {
        Self {
            surface: Rect::NOTHING,
            seek_track: Rect::NOTHING,
            volume_track: Rect::NOTHING,
            play_button: Rect::NOTHING,
            volume_button: Rect::NOTHING,
            next_button: Rect::NOTHING,
            settings_button: Rect::NOTHING,
            settings_menu: Rect::NOTHING,
        }
    }
}

/// Callbacks run on every progress tick while playing, in this order.
#[derive(Clone, Copy, Debug)]
enum TickTask {
    LoadBar,
    TimerLabel,
}

const TICK_TASKS: [TickTask; 2] = [TickTask::LoadBar, TickTask::TimerLabel];

/// Playback controls for one player instance.
pub struct Controller {
    options: ControllerOptions,
    view: ControlsView,
    layout: ControlsLayout,

    playback: Playback,
    seek_bar: SeekBar,
    volume_bar: VolumeBar,
    auto_hide: AutoHide,
    hotkeys: Hotkeys,
    waiting: WaitingWatchdog,

    light: bool,
    destroyed: bool,
}

impl Controller {
    /// Create a new [`Controller`].
    pub fn new(options: ControllerOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let mut view = ControlsView::default();
        let mut hotkeys = Hotkeys::default();
        if options.hotkeys {
            hotkeys.bind_quiet(&mut view);
        }
        info!("Controller created");
        Ok(Self {
            options,
            view,
            layout: ControlsLayout::default(),
            playback: Playback::default(),
            seek_bar: SeekBar::default(),
            volume_bar: VolumeBar::default(),
            auto_hide: AutoHide::default(),
            hotkeys,
            waiting: WaitingWatchdog::default(),
            light: false,
            destroyed: false,
        })
    }

    /// Options the controller was created with.
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// What the overlay should paint.
    pub fn view(&self) -> &ControlsView {
        &self.view
    }

    /// Hit areas from the last [`Self::set_layout`].
    pub fn layout(&self) -> &ControlsLayout {
        &self.layout
    }

    /// Update hit areas, normally once per frame from the renderer.
    pub fn set_layout(&mut self, layout: ControlsLayout) {
        self.layout = layout;
    }

    /// Confirmed playback state.
    pub fn status(&self) -> PlayStatus {
        self.playback.status()
    }

    /// Play toggle and its media subscriptions.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Auto-hide timer state.
    pub fn auto_hide_state(&self) -> &AutoHide {
        &self.auto_hide
    }

    /// Global hotkey binding.
    pub fn hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }

    /// Buffering watchdog.
    pub fn waiting(&self) -> &WaitingWatchdog {
        &self.waiting
    }

    /// Whether the chrome was revealed and the hide timer armed.
    pub fn is_shown(&self) -> bool {
        self.auto_hide.is_shown()
    }

    /// Whether either slider is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.seek_bar.is_dragging() || self.volume_bar.is_dragging()
    }

    /// Whether [`Self::destroy`] was called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Toggle playback.
    pub fn play(&self, host: &mut impl PlayerHost) {
        if self.destroyed {
            return;
        }
        self.playback.toggle(host);
    }

    /// Switch to the secondary source, if the player has one.
    pub fn next(&self, host: &mut impl PlayerHost) {
        if self.destroyed {
            return;
        }
        debug!("Next video: {}", host.has_next_source());
        if host.has_next_source() {
            host.next();
        }
    }

    /// Set the volume in percent. The value is rounded to the nearest whole
    /// percent and clamped to `0..=100`, so `42.6` stores `43`. Zero mutes.
    ///
    /// Returns the stored volume. A destroyed controller leaves the player
    /// alone and returns the last painted level.
    pub fn set_volume(&mut self, host: &mut impl PlayerHost, val: f64) -> u8 {
        if self.destroyed {
            return self.view.volume_fill;
        }
        self.volume_bar.set_volume(&mut self.view, host, val)
    }

    /// Volume of the media element as a `0..=1` fraction, not a percent.
    pub fn volume(&self, host: &impl PlayerHost) -> f64 {
        host.media().volume()
    }

    /// Mute, or unmute to the level the media element kept.
    pub fn toggle_mute(&mut self, host: &mut impl PlayerHost) -> u8 {
        if self.destroyed {
            return self.view.volume_fill;
        }
        self.volume_bar.toggle_mute(&mut self.view, host)
    }

    /// Reveal the chrome now, without arming the hide timer.
    pub fn show(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_hide.show(&mut self.view);
    }

    /// Hide the chrome and close the settings menu.
    pub fn hide(&mut self, host: &impl PlayerHost) {
        if self.destroyed {
            return;
        }
        self.auto_hide.hide(&mut self.view, host);
    }

    /// Reveal the chrome on the next frame and restart the hide timer.
    pub fn auto_hide(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_hide.request();
    }

    /// Empty the played fill, for a source change.
    pub fn reset_load_bar(&mut self) {
        if self.destroyed {
            return;
        }
        self.seek_bar.reset(&mut self.view);
    }

    /// Flip the global hotkey binding. Returns whether hotkeys are now bound,
    /// which is always false once destroyed.
    pub fn toggle_hotkeys(&mut self, host: &mut impl PlayerHost) -> bool {
        if self.destroyed {
            return false;
        }
        self.hotkeys.toggle(&mut self.view, host)
    }

    /// Feed a native media element signal.
    pub fn handle_media_event(
        &mut self,
        host: &mut impl PlayerHost,
        event: MediaEvent,
        now: Instant,
    ) {
        if self.destroyed {
            return;
        }
        match event {
            MediaEvent::Play => {
                self.playback.on_play(&mut self.view, host);
                self.auto_hide.request();
            }
            MediaEvent::Pause => self.playback.on_pause(&mut self.view, host),
            MediaEvent::Ended => {
                self.playback.on_ended(&mut self.view, host);
            }
            MediaEvent::TimeUpdate => {
                if self.playback.progress_attached() {
                    self.tick(&*host);
                }
            }
            MediaEvent::Waiting => {
                self.waiting
                    .start(&mut self.view, now, self.options.waiting_poll_interval)
            }
            MediaEvent::CanPlay => self.waiting.clear(&mut self.view),
            MediaEvent::Click => {
                if !host.menu_shown() && self.auto_hide.is_shown() {
                    self.play(host);
                }
            }
        }
    }

    fn tick(&mut self, host: &impl PlayerHost) {
        let media = host.media();
        for task in TICK_TASKS {
            match task {
                TickTask::LoadBar => self.seek_bar.update_load_bar(&mut self.view, media),
                TickTask::TimerLabel => {
                    self.view.time_current = format_time(media.current_time());
                    self.view.time_duration = format_time(media.duration());
                }
            }
        }
    }

    /// Pointer moved over the widget.
    pub fn pointer_move(&mut self, host: &mut impl PlayerHost, pos: Pos2) {
        if self.destroyed {
            return;
        }
        self.auto_hide.request();

        let layout = self.layout;
        self.seek_bar
            .drag_to(&mut self.view, host, layout.seek_track, pos);
        self.volume_bar
            .drag_to(&mut self.view, host, layout.volume_track, pos);
        if hover_rect(layout.seek_track).contains(pos) {
            self.seek_bar
                .hover(&mut self.view, host.media(), layout.seek_track, pos);
        }
    }

    /// Primary button pressed. Returns whether a slider took the press.
    pub fn pointer_down(&mut self, host: &mut impl PlayerHost, pos: Pos2) -> bool {
        if self.destroyed {
            return false;
        }
        let layout = self.layout;
        if layout.seek_track.contains(pos) {
            self.seek_bar
                .press(&mut self.view, host, layout.seek_track, pos);
            true
        } else if layout.volume_track.contains(pos) {
            self.volume_bar
                .press(&mut self.view, host, layout.volume_track, pos);
            true
        } else {
            false
        }
    }

    /// Primary button released anywhere. Ends any drag.
    pub fn pointer_up(&mut self) {
        self.seek_bar.release();
        self.volume_bar.release();
    }

    /// A click (press and release without a drag) at `pos`.
    pub fn click(&mut self, host: &mut impl PlayerHost, pos: Pos2, now: Instant) {
        if self.destroyed {
            return;
        }
        let layout = self.layout;
        if self.view.settings_open && layout.settings_menu.contains(pos) {
            self.settings_click(host, pos);
        } else if layout.settings_button.contains(pos) {
            self.toggle_settings();
        } else if layout.play_button.contains(pos) {
            self.play(host);
        } else if layout.volume_button.contains(pos) {
            self.toggle_mute(host);
        } else if layout.next_button.contains(pos) {
            self.next(host);
        } else if layout.seek_track.contains(pos) || layout.volume_track.contains(pos) {
            // handled on press
        } else if layout.surface.contains(pos) {
            self.handle_media_event(host, MediaEvent::Click, now);
        }
    }

    /// Key pressed anywhere on the host. Returns whether the key was consumed
    /// and should not reach anything else.
    pub fn key_down(&mut self, host: &mut impl PlayerHost, key: Key) -> bool {
        if self.destroyed {
            return false;
        }
        let Some(action) = self.hotkeys.action(key) else {
            return false;
        };
        match action {
            HotkeyAction::SeekBackward => {
                let to = (host.position() - self.options.seek_step).max(0.);
                host.seek(to);
            }
            HotkeyAction::SeekForward => {
                let mut to = host.position() + self.options.seek_step;
                if let Some(d) = media_duration(host.media()) {
                    to = to.min(d);
                }
                host.seek(to);
            }
            HotkeyAction::VolumeUp => {
                let v = host.volume() as f64 + self.options.volume_step as f64;
                self.set_volume(host, v);
            }
            HotkeyAction::VolumeDown => {
                let v = host.volume() as f64 - self.options.volume_step as f64;
                self.set_volume(host, v);
            }
            HotkeyAction::TogglePlay => self.play(host),
            HotkeyAction::Suppress => debug!("Suppressed {:?}", key),
        }
        true
    }

    /// Run due timers: the pending auto-hide arm, an expired hide and the buffering poll.
    pub fn update(&mut self, host: &impl PlayerHost, now: Instant) {
        if self.destroyed {
            return;
        }
        self.auto_hide.on_frame(
            &mut self.view,
            host,
            self.playback.status(),
            now,
            self.options.hide_delay,
        );
        self.waiting.poll(
            &mut self.view,
            host.media(),
            now,
            self.options.waiting_poll_interval,
        );
    }

    /// Whether the next frame has work even without input.
    pub fn frame_pending(&self) -> bool {
        self.auto_hide.frame_pending()
    }

    /// The earliest timer deadline, to schedule a wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_hide.hide_deadline(), self.waiting.next_poll()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Release every subscription and timer. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.playback.detach();
        self.hotkeys.release();
        self.auto_hide.cancel();
        self.waiting.cancel();
        self.seek_bar.release();
        self.volume_bar.release();
        if !self.destroyed {
            info!("Controller destroyed");
        }
        self.destroyed = true;
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.destroy();
    }
}
