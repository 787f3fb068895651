use std::time::Instant;

use egui::{
    pos2, vec2, Align2, Color32, CornerRadius, CursorIcon, Event, FontId, Modifiers,
    PointerButton, Rect, Response, Sense, Spinner, Ui, Vec2,
};

use crate::controller::{
    filled_rect, hover_rect, menu_row_rect, ControlsLayout, HOTKEYS, SETTINGS_ITEMS,
};
use crate::view::{CursorStyle, SettingsPage};
use crate::{Controller, PlayerHost};

/// Sizes of the default control bar painted over the video.
#[derive(Clone, Debug)]
pub struct ControlsOverlay {
    /// Distance between the bar contents and the edges of the video.
    pub margin: f32,
    /// Height of the seek and volume tracks.
    pub seekbar_height: f32,
    /// Font size of the button glyphs.
    pub icon_size: f32,
    /// Width of the volume track.
    pub volume_width: f32,
    /// Width of the settings menu.
    pub settings_width: f32,
    /// Height of one settings menu row.
    pub settings_row_height: f32,
}

impl Default for ControlsOverlay {
    fn default() -> Self {
        Self {
            margin: 10.,
            seekbar_height: 4.,
            icon_size: 16.,
            volume_width: 80.,
            settings_width: 140.,
            settings_row_height: 22.,
        }
    }
}

impl ControlsOverlay {
    /// Place the interactive parts inside the video rect, with room for
    /// `menu_rows` rows in the settings menu.
    pub fn layout(&self, rect: Rect, menu_rows: usize) -> ControlsLayout {
        let m = self.margin;
        let row_height = self.icon_size + 4.;
        let row_top = rect.bottom() - m - row_height;
        let seek_top = row_top - 6. - self.seekbar_height;

        let seek_track = Rect::from_min_size(
            pos2(rect.left() + m, seek_top),
            vec2((rect.width() - 2. * m).max(0.), self.seekbar_height),
        );
        let button = |x: f32| Rect::from_min_size(pos2(x, row_top), Vec2::splat(row_height));
        let play_button = button(rect.left() + m);
        let next_button = button(play_button.right() + 4.);

        let volume_track = Rect::from_min_size(
            pos2(
                rect.right() - m - self.volume_width,
                row_top + (row_height - self.seekbar_height) / 2.,
            ),
            vec2(self.volume_width, self.seekbar_height),
        );
        let volume_button = button(volume_track.left() - 4. - row_height);
        let settings_button = button(volume_button.left() - 4. - row_height);

        let menu_height = self.settings_row_height * menu_rows as f32;
        let settings_menu = Rect::from_min_max(
            pos2(
                (rect.right() - m - self.settings_width).max(rect.left()),
                (seek_top - 6. - menu_height).max(rect.top()),
            ),
            pos2(rect.right() - m, seek_top - 6.),
        );

        ControlsLayout {
            surface: rect,
            seek_track,
            volume_track,
            play_button,
            volume_button,
            next_button,
            settings_button,
            settings_menu,
        }
    }

    /// Show the controls over `rect`, driving `controller` from this frame's input.
    pub fn ui(
        &self,
        ui: &mut Ui,
        rect: Rect,
        controller: &mut Controller,
        host: &mut impl PlayerHost,
    ) -> Response {
        self.ui_at(ui, rect, controller, host, Instant::now())
    }

    /// [`Self::ui`] with an explicit clock.
    pub fn ui_at(
        &self,
        ui: &mut Ui,
        rect: Rect,
        controller: &mut Controller,
        host: &mut impl PlayerHost,
        now: Instant,
    ) -> Response {
        controller.set_layout(self.layout(rect, controller.settings_rows()));

        let id = ui.id().with("video_controls");
        let response = ui.interact(rect, id, Sense::click_and_drag());

        self.process_input(ui, rect, &response, controller, host, now);
        controller.update(&*host, now);
        self.request_repaint(ui, controller, now);

        // clicks may have switched the settings page
        let layout = self.layout(rect, controller.settings_rows());
        controller.set_layout(layout);

        if controller.view().cursor == CursorStyle::None && response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::None);
        }
        self.paint(ui, &layout, controller, &*host, response.hovered());
        response
    }

    fn process_input(
        &self,
        ui: &mut Ui,
        rect: Rect,
        response: &Response,
        controller: &mut Controller,
        host: &mut impl PlayerHost,
        now: Instant,
    ) {
        if controller.is_destroyed() {
            return;
        }
        let events = ui.input(|i| i.events.clone());
        for event in events {
            match event {
                Event::PointerMoved(pos) => {
                    if rect.contains(pos) || controller.is_dragging() {
                        controller.pointer_move(host, pos);
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !pressed {
                        controller.pointer_up();
                    } else if rect.contains(pos) {
                        controller.pointer_down(host, pos);
                    }
                }
                _ => {}
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                controller.click(host, pos, now);
            }
        }

        if controller.hotkeys().is_bound() {
            for key in HOTKEYS {
                if ui.input_mut(|i| i.consume_key(Modifiers::NONE, key)) {
                    controller.key_down(host, key);
                }
            }
        }
    }

    fn request_repaint(&self, ui: &Ui, controller: &Controller, now: Instant) {
        if controller.frame_pending() {
            ui.ctx().request_repaint();
        } else if let Some(deadline) = controller.next_deadline() {
            ui.ctx()
                .request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn paint(
        &self,
        ui: &mut Ui,
        layout: &ControlsLayout,
        controller: &Controller,
        host: &impl PlayerHost,
        hovered: bool,
    ) {
        let view = controller.view();

        if view.waiting {
            let spinner_size = 20.;
            ui.put(
                Rect::from_center_size(layout.surface.center(), Vec2::splat(spinner_size)),
                Spinner::new().size(spinner_size),
            );
        }

        if view.hidden {
            return;
        }

        let painter = ui.painter();
        let text_color = Color32::WHITE;
        let icon_font_id = FontId::proportional(self.icon_size);
        let text_font_id = FontId::proportional(self.icon_size - 2.);

        let mut shadow_rect = layout.surface;
        shadow_rect.set_top(layout.seek_track.top() - self.margin);
        painter.rect_filled(shadow_rect, CornerRadius::ZERO, Color32::from_black_alpha(96));

        // seek track
        let track = layout.seek_track;
        let fill = |frac: f32| filled_rect(track, frac);
        painter.rect_filled(track, CornerRadius::ZERO, Color32::GRAY.linear_multiply(0.5));
        painter.rect_filled(
            fill(view.loaded.fraction()),
            CornerRadius::ZERO,
            Color32::LIGHT_GRAY.linear_multiply(0.6),
        );
        let track_hovered = hovered
            && ui
                .ctx()
                .pointer_hover_pos()
                .is_some_and(|p| hover_rect(track).contains(p));
        if track_hovered {
            painter.rect_filled(
                fill(view.hover.fraction()),
                CornerRadius::ZERO,
                Color32::from_white_alpha(60),
            );
            let tip_pos = pos2(
                track.left() + track.width() * view.tooltip_left.fraction(),
                track.top() - 4.,
            );
            painter.text(
                tip_pos,
                Align2::CENTER_BOTTOM,
                &view.tooltip_text,
                text_font_id.clone(),
                text_color,
            );
        }
        let played = fill(view.played.fraction());
        painter.rect_filled(played, CornerRadius::ZERO, Color32::WHITE);
        if track_hovered || controller.is_dragging() {
            painter.circle_filled(played.right_center(), 6., Color32::WHITE);
        }

        // button row
        painter.text(
            layout.play_button.center(),
            Align2::CENTER_CENTER,
            view.play_icon.glyph(),
            icon_font_id.clone(),
            text_color,
        );
        let mut time_left = layout.play_button.right() + 8.;
        if host.has_next_source() {
            painter.text(
                layout.next_button.center(),
                Align2::CENTER_CENTER,
                "⏭",
                icon_font_id.clone(),
                text_color,
            );
            time_left = layout.next_button.right() + 8.;
        }
        painter.text(
            pos2(time_left, layout.play_button.center().y),
            Align2::LEFT_CENTER,
            format!("{} / {}", view.time_current, view.time_duration),
            text_font_id,
            text_color,
        );

        painter.text(
            layout.volume_button.center(),
            Align2::CENTER_CENTER,
            view.volume_icon.glyph(),
            icon_font_id,
            text_color,
        );
        let volume = layout.volume_track;
        painter.rect_filled(volume, CornerRadius::same(2), Color32::from_white_alpha(60));
        let volume_fill = filled_rect(volume, view.volume_fill as f32 / 100.);
        painter.rect_filled(volume_fill, CornerRadius::same(2), Color32::WHITE);

        painter.text(
            layout.settings_button.center(),
            Align2::CENTER_CENTER,
            "⚙",
            FontId::proportional(self.icon_size),
            if view.settings_open {
                Color32::LIGHT_BLUE
            } else {
                text_color
            },
        );
        if view.settings_open {
            self.paint_settings(ui, layout.settings_menu, controller);
        }
    }

    fn paint_settings(&self, ui: &Ui, menu: Rect, controller: &Controller) {
        let view = controller.view();
        let painter = ui.painter();
        let font_id = FontId::proportional(self.icon_size - 4.);
        painter.rect_filled(menu, CornerRadius::same(4), Color32::from_black_alpha(200));

        let rows: Vec<(String, bool)> = match view.settings_page {
            SettingsPage::Group => SETTINGS_ITEMS
                .iter()
                .map(|item| (item.label(view), false))
                .collect(),
            SettingsPage::PlaybackSpeed => controller
                .options()
                .playback_rates
                .iter()
                .map(|&rate| (format!("{}x", rate), rate == view.speed))
                .collect(),
        };
        let count = rows.len();
        for (i, (label, active)) in rows.into_iter().enumerate() {
            let row = menu_row_rect(menu, count, i);
            if active {
                painter.rect_filled(row, CornerRadius::ZERO, Color32::from_white_alpha(40));
            }
            painter.text(
                pos2(row.left() + 8., row.center().y),
                Align2::LEFT_CENTER,
                label,
                font_id.clone(),
                Color32::WHITE,
            );
        }
    }
}
