use std::time::Duration;

/// Configurable aspects of a [`Controller`](crate::Controller).
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    /// Inactivity before the chrome hides itself.
    pub hide_delay: Duration,
    /// How often the buffering watchdog polls the ready state.
    pub waiting_poll_interval: Duration,
    /// Seconds skipped by the seek hotkeys.
    pub seek_step: f64,
    /// Percent changed by the volume hotkeys.
    pub volume_step: u8,
    /// Rates offered in the playback speed box.
    pub playback_rates: Vec<f32>,
    /// Should the hotkeys be bound on construction?
    pub hotkeys: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(3000),
            waiting_poll_interval: Duration::from_millis(300),
            seek_step: 5.0,
            volume_step: 5,
            playback_rates: vec![0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
            hotkeys: true,
        }
    }
}

impl ControllerOptions {
    /// Reject options that would leave the controller with a dead timer or an empty menu.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.hide_delay.is_zero(), "hide delay must be non-zero");
        anyhow::ensure!(
            !self.waiting_poll_interval.is_zero(),
            "waiting poll interval must be non-zero"
        );
        anyhow::ensure!(
            self.seek_step.is_finite() && self.seek_step > 0.,
            "seek step must be a positive number of seconds, got {}",
            self.seek_step
        );
        anyhow::ensure!(!self.playback_rates.is_empty(), "no playback rates configured");
        if let Some(r) = self
            .playback_rates
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.)
        {
            anyhow::bail!("invalid playback rate {}", r);
        }
        Ok(())
    }
}
