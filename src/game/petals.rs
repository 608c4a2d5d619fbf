// game/petals.rs

use std::f32::consts::TAU;

use bevy::math::Vec2;

use crate::evade::{RandomSource, ViewportBounds};

/// Horizontal sway amplitude in pixels
const SWAY_AMPLITUDE: f32 = 18.0;

/// A decorative glyph drifting down behind the card
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    /// Horizontal anchor as a percentage of viewport width
    pub left_pct: f32,
    pub size: f32,
    /// Seconds before it first appears
    pub delay: f32,
    /// Seconds for one top-to-bottom fall
    pub duration: f32,
    pub sway_duration: f32,
    pub opacity: f32,
    pub symbol: String,
}

impl Petal {
    /// Fraction of the current fall, or `None` before the first appearance
    pub fn fall_progress(&self, t: f32) -> Option<f32> {
        let elapsed = t - self.delay;
        if elapsed < 0.0 {
            return None;
        }
        Some(elapsed.rem_euclid(self.duration) / self.duration)
    }

    pub fn sway_offset(&self, t: f32) -> f32 {
        let elapsed = (t - self.delay).max(0.0);
        (elapsed / self.sway_duration * TAU).sin() * SWAY_AMPLITUDE
    }

    /// Top-left screen position at time `t`; starts and ends just off-screen
    pub fn screen_position(&self, t: f32, viewport: ViewportBounds) -> Option<Vec2> {
        let progress = self.fall_progress(t)?;
        let x = self.left_pct / 100.0 * viewport.width + self.sway_offset(t);
        let y = -self.size + progress * (viewport.height + 2.0 * self.size);
        Some(Vec2::new(x, y))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PetalField {
    pub petals: Vec<Petal>,
}

impl PetalField {
    pub fn generate(count: usize, symbols: &[String], rng: &mut dyn RandomSource) -> Self {
        if symbols.is_empty() {
            return Self::default();
        }

        let petals = (0..count)
            .map(|_| {
                let left_pct = rng.next_unit() * 100.0;
                let size = 10.0 + rng.next_unit() * 14.0;
                let delay = rng.next_unit() * 18.0;
                let duration = 14.0 + rng.next_unit() * 14.0;
                let sway_duration = 5.0 + rng.next_unit() * 5.0;
                let opacity = 0.06 + rng.next_unit() * 0.12;
                let index = ((rng.next_unit() * symbols.len() as f32) as usize).min(symbols.len() - 1);

                Petal {
                    left_pct,
                    size,
                    delay,
                    duration,
                    sway_duration,
                    opacity,
                    symbol: symbols[index].clone(),
                }
            })
            .collect();

        Self { petals }
    }
}
