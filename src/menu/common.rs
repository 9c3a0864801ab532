use bevy::prelude::*;

pub(super) fn start_tint() -> Color {
    Color::srgb(0.85, 0.85, 0.85)
}
pub(super) fn start_hover_tint() -> Color {
    Color::WHITE
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn game_over_text() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}
pub(super) fn game_over_hover_text() -> Color {
    Color::srgb(1.0, 0.45, 0.45)
}
