use std::f32::consts::PI;

use eframe::egui::{
    Color32, CornerRadius, Margin, Mesh, Painter, Pos2, Rect, Shadow, Shape, Vec2, Visuals, vec2,
};

/// Colors for the whole screen, fixed at compile time.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub page_start: Color32,
    pub page_end: Color32,
    pub card_fill: Color32,
    pub card_shadow: Color32,
    pub title: Color32,
    pub text_muted: Color32,
    pub input_fill: Color32,
    pub input_text: Color32,
    pub outline: Color32,
    pub primary_start: Color32,
    pub primary_end: Color32,
    pub primary_text: Color32,
    pub secondary_fill: Color32,
    pub secondary_text: Color32,
    pub result_fill: Color32,
    pub bar_track: Color32,
    pub toxic_text: Color32,
    pub toxic_bar: (Color32, Color32),
    pub safe_text: Color32,
    pub safe_bar: (Color32, Color32),
    pub error_fill: Color32,
    pub status_fill: Color32,
    pub status_text: Color32,
}

pub const PALETTE: Palette = Palette {
    page_start: Color32::from_rgb(0x66, 0x7e, 0xea),
    page_end: Color32::from_rgb(0x76, 0x4b, 0xa2),
    card_fill: Color32::WHITE,
    card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 76),
    title: Color32::from_rgb(0x11, 0x11, 0x11),
    text_muted: Color32::from_rgb(0x55, 0x55, 0x55),
    input_fill: Color32::from_rgb(0xfa, 0xfa, 0xfa),
    input_text: Color32::BLACK,
    outline: Color32::from_rgb(0xdd, 0xdd, 0xdd),
    primary_start: Color32::from_rgb(0x5f, 0x6c, 0xff),
    primary_end: Color32::from_rgb(0x8a, 0x7c, 0xff),
    primary_text: Color32::WHITE,
    secondary_fill: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    secondary_text: Color32::from_rgb(0x33, 0x33, 0x33),
    result_fill: Color32::from_rgb(0xf4, 0xf6, 0xfb),
    bar_track: Color32::from_rgb(0xdd, 0xdd, 0xdd),
    toxic_text: Color32::from_rgb(0xc6, 0x28, 0x28),
    toxic_bar: (
        Color32::from_rgb(0xff, 0x52, 0x52),
        Color32::from_rgb(0xff, 0x86, 0x7c),
    ),
    safe_text: Color32::from_rgb(0x2e, 0x7d, 0x32),
    safe_bar: (
        Color32::from_rgb(0x4c, 0xaf, 0x50),
        Color32::from_rgb(0x81, 0xc7, 0x84),
    ),
    error_fill: Color32::from_rgb(0xfd, 0xec, 0xea),
    status_fill: Color32::from_rgba_premultiplied(12, 10, 24, 200),
    status_text: Color32::from_rgb(0xee, 0xee, 0xf4),
};

pub fn palette() -> &'static Palette {
    &PALETTE
}

pub const CARD_MAX_WIDTH: f32 = 520.0;
pub const CARD_SCREEN_MARGIN: f32 = 16.0;
pub const CARD_PADDING: i8 = 26;
pub const CARD_RADIUS: u8 = 20;
pub const CARD_GAP: f32 = 16.0;
pub const CONTROL_RADIUS: u8 = 14;
pub const BUTTON_HEIGHT: f32 = 46.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const CLEAR_BUTTON_WIDTH: f32 = 110.0;
pub const INPUT_ROWS: usize = 6;
pub const BAR_HEIGHT: f32 = 8.0;
pub const BAR_ANIMATION_SECS: f32 = 0.4;
pub const DISABLED_OPACITY: f32 = 0.6;
const HOVER_LIGHTEN: f32 = 0.12;
const GRADIENT_ARC_STEPS: usize = 6;

pub fn card_shadow() -> Shadow {
    Shadow {
        offset: [0, 20],
        blur: 45,
        spread: 0,
        color: PALETTE.card_shadow,
    }
}

fn primary_shadow() -> Shadow {
    Shadow {
        offset: [0, 6],
        blur: 18,
        spread: 0,
        color: Color32::from_rgba_unmultiplied(0x5f, 0x6c, 0xff, 90),
    }
}

pub fn control_radius() -> CornerRadius {
    CornerRadius::same(CONTROL_RADIUS)
}

pub fn control_margin() -> Margin {
    Margin::same(14)
}

/// Dim a color the way a disabled control is dimmed.
pub fn dimmed(color: Color32, enabled: bool) -> Color32 {
    if enabled {
        color
    } else {
        color.gamma_multiply(DISABLED_OPACITY)
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.panel_fill = palette.page_start;
    visuals.window_fill = palette.card_fill;
    visuals.extreme_bg_color = palette.input_fill;
    visuals.selection.bg_fill = palette.primary_end.gamma_multiply(0.35);
    visuals.text_cursor.stroke.color = palette.input_text;
    visuals.widgets.inactive.bg_stroke.color = palette.outline;
}

/// Paint a rectangle whose color runs from `left` to `right`.
pub fn paint_horizontal_gradient(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    paint_corner_gradient(painter, rect, [left, right, left, right]);
}

/// Paint a rectangle diagonally from its top-left to its bottom-right color.
pub fn paint_diagonal_gradient(painter: &Painter, rect: Rect, start: Color32, end: Color32) {
    let middle = lerp_color(start, end, 0.5);
    paint_corner_gradient(painter, rect, [start, middle, middle, end]);
}

/// Shadow and gradient fill drawn beneath the Analyze button.
pub fn primary_button_backdrop(rect: Rect, enabled: bool, hovered: bool) -> Shape {
    let palette = palette();
    let mut left = dimmed(palette.primary_start, enabled);
    let mut right = dimmed(palette.primary_end, enabled);
    if enabled && hovered {
        left = lerp_color(left, Color32::WHITE, HOVER_LIGHTEN);
        right = lerp_color(right, Color32::WHITE, HOVER_LIGHTEN);
    }
    let mut shapes = Vec::with_capacity(2);
    if enabled {
        shapes.push(primary_shadow().as_shape(rect, control_radius()).into());
    }
    shapes.push(Shape::mesh(rounded_horizontal_gradient(
        rect,
        f32::from(CONTROL_RADIUS),
        left,
        right,
    )));
    Shape::Vec(shapes)
}

/// Left-to-right gradient over a rounded rectangle, fanned out from its center.
pub fn rounded_horizontal_gradient(
    rect: Rect,
    radius: f32,
    left: Color32,
    right: Color32,
) -> Mesh {
    let mut mesh = Mesh::default();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return mesh;
    }
    let color_at = |x: f32| {
        let t = ((x - rect.left()) / rect.width()).clamp(0.0, 1.0);
        lerp_color(left, right, t)
    };
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    // Screen y points down, so each arc sweeps clockwise from its start angle.
    let arcs = [
        (rect.right_bottom() + vec2(-radius, -radius), 0.0),
        (rect.left_bottom() + vec2(radius, -radius), 0.5),
        (rect.left_top() + vec2(radius, radius), 1.0),
        (rect.right_top() + vec2(-radius, radius), 1.5),
    ];
    let center = rect.center();
    mesh.colored_vertex(center, color_at(center.x));
    for (corner, start) in arcs {
        for step in 0..=GRADIENT_ARC_STEPS {
            let turn = start + 0.5 * step as f32 / GRADIENT_ARC_STEPS as f32;
            let pos = corner + radius * Vec2::angled(turn * PI);
            mesh.colored_vertex(pos, color_at(pos.x));
        }
    }
    let ring = mesh.vertices.len() as u32 - 1;
    for idx in 0..ring {
        mesh.add_triangle(0, 1 + idx, 1 + (idx + 1) % ring);
    }
    mesh
}

/// Corners are ordered top-left, top-right, bottom-left, bottom-right.
fn paint_corner_gradient(painter: &Painter, rect: Rect, colors: [Color32; 4]) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let corners: [Pos2; 4] = [
        rect.left_top(),
        rect.right_top(),
        rect.left_bottom(),
        rect.right_bottom(),
    ];
    let mut mesh = Mesh::default();
    for (pos, color) in corners.into_iter().zip(colors) {
        mesh.colored_vertex(pos, color);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Tone for status bar messaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Busy => "Working",
        StatusTone::Info => "Done",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(120, 120, 130),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 160, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}
