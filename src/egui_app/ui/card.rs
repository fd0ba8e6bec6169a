use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, Align2, Area, Color32, Frame, Id, RichText, Shape, Stroke, Ui};

/// Button clicks collected while drawing; applied once the frame is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CardActions {
    analyze: bool,
    clear: bool,
}

impl EguiApp {
    /// Paint the page background and the centered card.
    pub(super) fn render_page(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let available = egui::CentralPanel::default()
            .frame(Frame::new())
            .show(ctx, |ui| {
                let page = ui.max_rect();
                style::paint_diagonal_gradient(
                    ui.painter(),
                    page,
                    palette.page_start,
                    palette.page_end,
                );
                page
            })
            .inner;

        let width = (available.width() - 2.0 * style::CARD_SCREEN_MARGIN)
            .min(style::CARD_MAX_WIDTH)
            .max(0.0);
        let inner_width = (width - 2.0 * f32::from(style::CARD_PADDING)).max(0.0);
        let mut actions = CardActions::default();
        Area::new(Id::new("toxicity_card"))
            .constrain_to(available)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(palette.card_fill)
                    .corner_radius(style::CARD_RADIUS)
                    .inner_margin(style::CARD_PADDING)
                    .shadow(style::card_shadow())
                    .show(ui, |ui| {
                        ui.set_width(inner_width);
                        ui.spacing_mut().item_spacing.y = style::CARD_GAP;
                        actions = self.render_card_body(ui);
                    });
            });

        if actions.analyze {
            self.controller.request_classification();
        }
        if actions.clear {
            self.controller.reset();
        }
    }

    fn render_card_body(&mut self, ui: &mut Ui) -> CardActions {
        let palette = style::palette();
        ui.label(
            RichText::new(view_model::TITLE)
                .size(24.0)
                .strong()
                .color(palette.title),
        );
        ui.label(
            RichText::new(view_model::SUBTITLE)
                .size(14.0)
                .color(palette.text_muted),
        );
        self.render_input(ui);
        let actions = self.render_buttons(ui);
        if let Some(result) = self.controller.ui.result.as_ref() {
            super::result_panel::render_result(ui, &view_model::result_view(result));
        } else {
            super::result_panel::reset_bar_animation(ui.ctx());
        }
        if let Some(reason) = self.controller.ui.last_error.as_deref() {
            super::result_panel::render_failure(ui, reason);
        }
        actions
    }

    fn render_input(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let mut buffer = self.controller.ui.input.clone();
        let response = ui.add(
            egui::TextEdit::multiline(&mut buffer)
                .hint_text(view_model::INPUT_HINT)
                .desired_rows(style::INPUT_ROWS)
                .desired_width(f32::INFINITY)
                .text_color(palette.input_text)
                .background_color(palette.input_fill)
                .margin(style::control_margin()),
        );
        if response.changed() {
            self.controller.update_text(buffer);
        }
    }

    fn render_buttons(&mut self, ui: &mut Ui) -> CardActions {
        let palette = style::palette();
        let mut actions = CardActions::default();
        let can_request = self.controller.can_request();
        let can_reset = self.controller.can_reset();
        let label = view_model::analyze_label(self.controller.ui.loading);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = style::BUTTON_GAP;
            let analyze_width =
                (ui.available_width() - style::CLEAR_BUTTON_WIDTH - style::BUTTON_GAP).max(0.0);
            let analyze = egui::Button::new(
                RichText::new(label)
                    .size(15.0)
                    .strong()
                    .color(palette.primary_text),
            )
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
            .corner_radius(style::control_radius())
            .min_size(egui::vec2(analyze_width, style::BUTTON_HEIGHT));
            // Reserve a slot so the gradient lands beneath the button label.
            let backdrop = ui.painter().add(Shape::Noop);
            let response = ui.add_enabled(can_request, analyze);
            ui.painter().set(
                backdrop,
                style::primary_button_backdrop(response.rect, can_request, response.hovered()),
            );
            actions.analyze = response.clicked();

            let clear = egui::Button::new(
                RichText::new(view_model::CLEAR_LABEL)
                    .size(14.0)
                    .strong()
                    .color(palette.secondary_text),
            )
            .fill(style::dimmed(palette.secondary_fill, can_reset))
            .stroke(Stroke::new(1.0, palette.outline))
            .corner_radius(style::control_radius())
            .min_size(egui::vec2(style::CLEAR_BUTTON_WIDTH, style::BUTTON_HEIGHT));
            actions.clear = ui.add_enabled(can_reset, clear).clicked();
        });
        actions
    }
}
