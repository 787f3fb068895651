//! Small helpers shared by the controller and the overlay.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Format seconds as `MM:SS`. Anything that is not a finite, non-negative
/// number of seconds is shown as `00:00`.
pub fn format_time(time: f64) -> String {
    if !time.is_finite() || time < 0. {
        return "00:00".to_owned();
    }
    let min = (time / 60.).floor() as u64;
    let sec = (time % 60.).floor() as u64;
    format!("{:02}:{:02}", min, sec)
}

/// Describe a jump from `last` to `now` for the notice toast.
pub fn seek_to_seconds_text(last: f64, now: f64) -> String {
    if last < now {
        format!("Fast forward {} s", (now - last) as i64)
    } else {
        format!("Rewind {} s", (last - now) as i64)
    }
}

/// Generate an id unique within this process for the given prefix: `prefix1`, `prefix2`, ...
pub fn unique_id(prefix: &str) -> String {
    static COUNTERS: OnceLock<Mutex<HashMap<String, u64>>> = OnceLock::new();
    let mut counters = COUNTERS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let id = counters.entry(prefix.to_owned()).or_insert(0);
    *id += 1;
    format!("{}{}", prefix, id)
}

/// A pending request to run something on the next rendered frame.
/// Multiple requests before the frame collapse into one.
#[derive(Default, Debug, Clone, Copy)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    /// Ask for the next frame.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Forget a pending request.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Whether a request waits for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the request, returning whether one was pending.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Fullscreen handling on top of egui viewport commands.
pub mod fullscreen {
    use egui::{Context, ViewportCommand};

    /// Whether the current viewport reports itself as fullscreen.
    pub fn is_fullscreen(ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().fullscreen.unwrap_or(false))
    }

    /// Whether the backend reports fullscreen state at all, which it only does when it can change it.
    pub fn fullscreen_enabled(ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().fullscreen.is_some())
    }

    /// Ask the backend to go fullscreen.
    pub fn request_fullscreen(ctx: &Context) {
        ctx.send_viewport_cmd(ViewportCommand::Fullscreen(true));
    }

    /// Leave fullscreen.
    pub fn cancel_fullscreen(ctx: &Context) {
        ctx.send_viewport_cmd(ViewportCommand::Fullscreen(false));
    }
}
