use std::time::Instant;

use eframe::NativeOptions;
use egui::{CentralPanel, Color32, ViewportBuilder};
use egui_video_controls::{
    Controller, ControllerOptions, ControlsOverlay, MediaElement, MediaEvent, PlayStatus,
    PlayerEvent, PlayerHost, ReadyState, ScreenMode,
};

fn main() {
    env_logger::init();
    let mut opt = NativeOptions::default();
    opt.viewport = ViewportBuilder::default().with_inner_size([1270.0, 740.0]);

    let _ = eframe::run_native("app", opt, Box::new(|_cc| Ok(Box::new(App::new()?))));
}

/// A clock pretending to be a two minute clip.
struct ClockMedia {
    duration: f64,
    current_time: f64,
    playing: bool,
    played: bool,
    muted: bool,
    volume: f64,
    looping: bool,
}

impl MediaElement for ClockMedia {
    fn duration(&self) -> f64 {
        self.duration
    }
    fn current_time(&self) -> f64 {
        self.current_time
    }
    fn buffered_end(&self) -> Option<f64> {
        Some((self.current_time + 20.).min(self.duration))
    }
    fn ready_state(&self) -> ReadyState {
        ReadyState::HaveEnoughData
    }
    fn has_played(&self) -> bool {
        self.played
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

struct DemoPlayer {
    media: ClockMedia,
    volume: u8,
    rate: f32,
    /// Signals the media would fire, drained every frame.
    pending: Vec<MediaEvent>,
}

impl PlayerHost for DemoPlayer {
    type Media = ClockMedia;

    fn media(&self) -> &ClockMedia {
        &self.media
    }
    fn media_mut(&mut self) -> &mut ClockMedia {
        &mut self.media
    }
    fn play(&mut self) {
        self.media.playing = true;
        self.media.played = true;
        self.pending.push(MediaEvent::Play);
    }
    fn pause(&mut self) {
        if self.media.playing {
            self.media.playing = false;
            self.pending.push(MediaEvent::Pause);
        }
    }
    fn next(&mut self) {}
    fn has_next_source(&self) -> bool {
        false
    }
    fn position(&self) -> f64 {
        self.media.current_time
    }
    fn seek(&mut self, time: f64) {
        self.media.current_time = time.clamp(0., self.media.duration);
    }
    fn set_playback_rate(&mut self, rate: f32) {
        self.rate = rate;
    }
    fn show_stats(&mut self, status: PlayStatus) {
        log::info!("status {:?}", status);
    }
    fn screen_mode(&self) -> ScreenMode {
        ScreenMode::Normal
    }
    fn menu_shown(&self) -> bool {
        false
    }
    fn volume(&self) -> u8 {
        self.volume
    }
    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
    fn notice(&mut self, text: &str) {
        log::info!("notice: {}", text);
    }
    fn set_volume_text(&mut self, _volume: u8) {}
    fn dispatch(&mut self, event: PlayerEvent) {
        log::info!("event {:?}", event);
    }
}

struct App {
    player: DemoPlayer,
    controller: Controller,
    overlay: ControlsOverlay,
    last_frame: Instant,
}

impl App {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            player: DemoPlayer {
                media: ClockMedia {
                    duration: 120.,
                    current_time: 0.,
                    playing: false,
                    played: false,
                    muted: false,
                    volume: 0.8,
                    looping: false,
                },
                volume: 80,
                rate: 1.0,
                pending: Vec::new(),
            },
            controller: Controller::new(ControllerOptions::default())?,
            overlay: ControlsOverlay::default(),
            last_frame: Instant::now(),
        })
    }

    fn advance_clock(&mut self, now: Instant) {
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        let media = &mut self.player.media;
        if media.playing {
            media.current_time += dt * self.player.rate as f64;
            self.player.pending.push(MediaEvent::TimeUpdate);
            if media.current_time >= media.duration {
                media.current_time = media.duration;
                self.player.pending.push(MediaEvent::Ended);
            }
        }
        for event in std::mem::take(&mut self.player.pending) {
            self.controller
                .handle_media_event(&mut self.player, event, now);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_clock(Instant::now());
        CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            ui.painter().rect_filled(rect, 0., Color32::from_gray(20));
            self.overlay
                .ui(ui, rect, &mut self.controller, &mut self.player);
        });
        if self.player.media.playing {
            ctx.request_repaint();
        }
    }
}
