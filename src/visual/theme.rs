//! Card colors and type sizes

use bevy::prelude::*;

pub const BACKGROUND: Color = Color::srgb(0.039, 0.039, 0.039);
pub const IVORY: Color = Color::srgb(0.957, 0.945, 0.910);
pub const GOLD: Color = Color::srgb(0.545, 0.451, 0.333);

/// Ivory at reduced strength for secondary copy
pub fn faded_ivory(alpha: f32) -> Color {
    IVORY.with_alpha(alpha)
}

pub fn faded_gold(alpha: f32) -> Color {
    GOLD.with_alpha(alpha)
}

pub const TITLE_SIZE: f32 = 64.0;
pub const HEADING_SIZE: f32 = 48.0;
pub const BODY_SIZE: f32 = 18.0;
pub const BUTTON_TEXT_SIZE: f32 = 16.0;

/// Resting and hovered fill of the "Yes" button
pub const ACCEPT_FILL: Color = IVORY;
pub const ACCEPT_FILL_HOVER: Color = Color::srgb(1.0, 0.98, 0.95);

/// The "No" button is an outline-weight fill
pub const EVADE_FILL: Color = Color::srgba(0.957, 0.945, 0.910, 0.08);
