use super::style;
use crate::egui_app::view_model::{self, ResultTone, ResultView};
use eframe::egui::{self, Align, CornerRadius, Frame, Id, Layout, RichText, Sense, Ui};

fn bar_animation_id() -> Id {
    Id::new("confidence_bar_fill")
}

/// Draw the verdict, confidence bar and confidence line.
pub(super) fn render_result(ui: &mut Ui, view: &ResultView) {
    let palette = style::palette();
    let (text_color, (bar_start, bar_end)) = match view.tone {
        ResultTone::Toxic => (palette.toxic_text, palette.toxic_bar),
        ResultTone::Safe => (palette.safe_text, palette.safe_bar),
    };
    Frame::new()
        .fill(palette.result_fill)
        .corner_radius(style::control_radius())
        .inner_margin(style::control_margin())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = 8.0;
            ui.label(
                RichText::new(view.verdict)
                    .size(15.0)
                    .strong()
                    .color(text_color),
            );

            let target = f32::from(view.percent) / 100.0;
            let fraction = ui.ctx().animate_value_with_time(
                bar_animation_id(),
                target,
                style::BAR_ANIMATION_SECS,
            );
            let (track, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), style::BAR_HEIGHT),
                Sense::hover(),
            );
            let radius = CornerRadius::same((style::BAR_HEIGHT / 2.0) as u8);
            ui.painter().rect_filled(track, radius, palette.bar_track);
            let mut fill = track;
            fill.set_width(track.width() * fraction.clamp(0.0, 1.0));
            style::paint_horizontal_gradient(
                &ui.painter().with_clip_rect(track),
                fill,
                bar_start,
                bar_end,
            );

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(
                    RichText::new(&view.confidence_text)
                        .size(12.0)
                        .strong()
                        .color(palette.text_muted),
                );
            });
        });
}

/// Drive the bar animation back to empty so the next result grows from zero.
pub(super) fn reset_bar_animation(ctx: &egui::Context) {
    ctx.animate_value_with_time(bar_animation_id(), 0.0, style::BAR_ANIMATION_SECS);
}

pub(super) fn render_failure(ui: &mut Ui, reason: &str) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.error_fill)
        .corner_radius(style::control_radius())
        .inner_margin(style::control_margin())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(view_model::failure_text(reason))
                    .size(14.0)
                    .color(palette.toxic_text),
            );
        });
}
