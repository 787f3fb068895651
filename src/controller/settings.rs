use egui::{Pos2, Rect};
use log::{debug, warn};

use super::Controller;
use crate::view::{on_off, ControlsView, SettingsPage, LIGHTS_OFF, LIGHTS_ON};
use crate::{MediaElement, PlayerEvent, PlayerHost};

/// Rows of the settings group, top to bottom.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SettingsItem {
    /// Opens the playback speed box.
    Speed,
    /// Flips the video horizontally.
    Mirror,
    /// Loops the media element.
    Loop,
    /// Binds or releases the global hotkeys.
    Hotkeys,
    /// Dims everything around the player.
    Light,
}

/// The settings group in display order.
pub const SETTINGS_ITEMS: [SettingsItem; 5] = [
    SettingsItem::Speed,
    SettingsItem::Mirror,
    SettingsItem::Loop,
    SettingsItem::Hotkeys,
    SettingsItem::Light,
];

impl SettingsItem {
    /// Text of the row, including its current state.
    pub fn label(&self, view: &ControlsView) -> String {
        match self {
            SettingsItem::Speed => format!("Speed {}x", view.speed),
            SettingsItem::Mirror => format!("Mirror {}", view.mirror_label),
            SettingsItem::Loop => format!("Loop {}", view.loop_label),
            SettingsItem::Hotkeys => format!("Hotkeys {}", view.hotkey_label),
            SettingsItem::Light => view.light_label.to_owned(),
        }
    }
}

/// Row of `menu` under `pos` when the menu is split into `rows` equal rows.
pub(crate) fn menu_row(menu: Rect, rows: usize, pos: Pos2) -> Option<usize> {
    if rows == 0 || !menu.contains(pos) {
        return None;
    }
    let row_height = menu.height() / rows as f32;
    let row = ((pos.y - menu.top()) / row_height) as usize;
    Some(row.min(rows - 1))
}

/// Rect of row `row` out of `rows`.
pub(crate) fn menu_row_rect(menu: Rect, rows: usize, row: usize) -> Rect {
    let row_height = menu.height() / rows.max(1) as f32;
    let mut r = menu;
    r.set_top(menu.top() + row_height * row as f32);
    r.set_height(row_height);
    r
}

impl Controller {
    /// Open or close the settings menu.
    pub fn toggle_settings(&mut self) {
        if self.destroyed {
            return;
        }
        self.view.settings_open = !self.view.settings_open;
        self.view.settings_page = SettingsPage::Group;
    }

    /// Swap the settings group for the playback speed box.
    pub fn open_speed_box(&mut self) {
        if self.destroyed {
            return;
        }
        self.view.settings_page = SettingsPage::PlaybackSpeed;
    }

    /// Number of rows on the visible settings page.
    pub fn settings_rows(&self) -> usize {
        match self.view.settings_page {
            SettingsPage::Group => SETTINGS_ITEMS.len(),
            SettingsPage::PlaybackSpeed => self.options.playback_rates.len(),
        }
    }

    /// Click inside the speed box. `Some(index)` into
    /// [`ControllerOptions::playback_rates`](crate::ControllerOptions::playback_rates)
    /// when a rate entry was hit. The box closes either way.
    pub fn select_speed(&mut self, host: &mut impl PlayerHost, index: Option<usize>) {
        if self.destroyed {
            return;
        }
        if let Some(i) = index {
            match self.options.playback_rates.get(i) {
                Some(&rate) => {
                    debug!("Playback rate {}", rate);
                    host.set_playback_rate(rate);
                    self.view.speed = rate;
                }
                None => warn!("No playback rate at {}", i),
            }
        }
        self.view.settings_page = SettingsPage::Group;
    }

    /// Whether the video is flipped horizontally.
    pub fn is_mirrored(&self) -> bool {
        self.view.mirrored
    }

    /// Flip the video horizontally.
    pub fn toggle_mirror(&mut self, host: &mut impl PlayerHost) -> bool {
        if self.destroyed {
            return self.view.mirrored;
        }
        let mirrored = !self.view.mirrored;
        self.view.mirrored = mirrored;
        self.view.mirror_label = on_off(mirrored);
        host.notice(&format!("Mirror {}", on_off(mirrored)));
        mirrored
    }

    /// Flip looping on the media element.
    pub fn toggle_loop(&mut self, host: &mut impl PlayerHost) -> bool {
        if self.destroyed {
            return host.media().looping();
        }
        let looping = !host.media().looping();
        host.media_mut().set_looping(looping);
        self.view.loop_label = on_off(looping);
        host.notice(&format!("Loop {}", on_off(looping)));
        looping
    }

    /// Whether the lights are off around the player.
    pub fn is_light(&self) -> bool {
        self.light
    }

    /// Set the light state and tell the player.
    pub fn set_light(&mut self, host: &mut impl PlayerHost, light: bool) {
        if self.destroyed {
            return;
        }
        self.light = light;
        self.view.light_label = if light { LIGHTS_OFF } else { LIGHTS_ON };
        host.dispatch(PlayerEvent::Light(light));
    }

    /// Click at `pos` inside the open settings menu.
    pub(super) fn settings_click(&mut self, host: &mut impl PlayerHost, pos: Pos2) {
        let row = menu_row(self.layout.settings_menu, self.settings_rows(), pos);
        match self.view.settings_page {
            SettingsPage::PlaybackSpeed => self.select_speed(host, row),
            SettingsPage::Group => {
                let Some(item) = row.and_then(|i| SETTINGS_ITEMS.get(i)) else {
                    return;
                };
                debug!("Settings {:?}", item);
                match item {
                    SettingsItem::Speed => self.open_speed_box(),
                    SettingsItem::Mirror => {
                        self.toggle_mirror(host);
                    }
                    SettingsItem::Loop => {
                        self.toggle_loop(host);
                    }
                    SettingsItem::Hotkeys => {
                        self.toggle_hotkeys(host);
                    }
                    SettingsItem::Light => self.set_light(host, !self.light),
                }
            }
        }
    }
}
