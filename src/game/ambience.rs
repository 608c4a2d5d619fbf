// game/ambience.rs

//! Background motion on the celebration screen: sparkling dust motes,
//! hearts rising through the frame and the bobbing symbol row.

use std::f32::consts::TAU;

use bevy::math::Vec2;

use crate::evade::{RandomSource, ViewportBounds};

/// Fill alpha of a dust mote at full sparkle
pub const MOTE_ALPHA: f32 = 0.3;
const SPARKLE_PERIOD: f32 = 3.0;

/// Brightest a rising heart gets
pub const RISING_HEART_PEAK_ALPHA: f32 = 0.15;
/// Hearts travel from the bottom edge to this far above the top (fraction of height)
const RISE_OVERSHOOT: f32 = 0.2;

const BOB_HEIGHT: f32 = 4.0;
const BOB_PERIOD: f32 = 2.5;
const BOB_STAGGER: f32 = 0.25;

/// Smooth 0 → 1 → 0 over one period
fn cycle(elapsed: f32, period: f32) -> f32 {
    0.5 - 0.5 * (elapsed / period * TAU).cos()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DustMote {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay: f32,
    pub size: f32,
}

impl DustMote {
    /// 0 until the delay has passed, then pulses
    pub fn sparkle(&self, t: f32) -> f32 {
        let elapsed = t - self.delay;
        if elapsed < 0.0 {
            return 0.0;
        }
        cycle(elapsed, SPARKLE_PERIOD)
    }

    pub fn opacity(&self, t: f32) -> f32 {
        MOTE_ALPHA * (0.2 + 0.8 * self.sparkle(t))
    }

    pub fn scale(&self, t: f32) -> f32 {
        0.8 + 0.4 * self.sparkle(t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RisingHeart {
    pub left_pct: f32,
    pub delay: f32,
    pub size: f32,
    pub duration: f32,
}

impl RisingHeart {
    /// Fraction of the current rise, or `None` before the first one
    pub fn rise_progress(&self, t: f32) -> Option<f32> {
        let elapsed = t - self.delay;
        if elapsed < 0.0 {
            return None;
        }
        Some(elapsed.rem_euclid(self.duration) / self.duration)
    }

    /// Top-left at time `t`; the rise eases out, decelerating near the top
    pub fn screen_position(&self, t: f32, viewport: ViewportBounds) -> Option<Vec2> {
        let progress = self.rise_progress(t)?;
        let eased = 1.0 - (1.0 - progress).powi(3);
        Some(Vec2::new(
            self.left_pct / 100.0 * viewport.width,
            viewport.height * (1.0 - (1.0 + RISE_OVERSHOOT) * eased),
        ))
    }

    /// Fades in over the first third, holds, fades out over the last third
    pub fn opacity(&self, t: f32) -> f32 {
        let Some(progress) = self.rise_progress(t) else {
            return 0.0;
        };
        let ramp = if progress < 1.0 / 3.0 {
            progress * 3.0
        } else if progress < 2.0 / 3.0 {
            1.0
        } else {
            (1.0 - progress) * 3.0
        };
        RISING_HEART_PEAK_ALPHA * ramp.clamp(0.0, 1.0)
    }
}

/// Everything drifting behind the celebration text
#[derive(Debug, Clone, Default)]
pub struct Ambience {
    pub motes: Vec<DustMote>,
    pub hearts: Vec<RisingHeart>,
}

impl Ambience {
    pub fn generate(motes: usize, hearts: usize, rng: &mut dyn RandomSource) -> Self {
        let motes = (0..motes)
            .map(|_| DustMote {
                left_pct: rng.next_unit() * 100.0,
                top_pct: rng.next_unit() * 100.0,
                delay: rng.next_unit() * 5.0,
                size: 2.0 + rng.next_unit() * 3.0,
            })
            .collect();

        let hearts = (0..hearts)
            .map(|_| RisingHeart {
                left_pct: 10.0 + rng.next_unit() * 80.0,
                delay: rng.next_unit() * 3.0,
                size: 14.0 + rng.next_unit() * 20.0,
                duration: 8.0 + rng.next_unit() * 5.0,
            })
            .collect();

        Self { motes, hearts }
    }
}

/// Vertical offset of the `index`-th symbol in the row (negative is up).
/// Each symbol starts a quarter second after its left neighbour.
pub fn symbol_bob(index: usize, t: f32) -> f32 {
    let elapsed = t - index as f32 * BOB_STAGGER;
    if elapsed < 0.0 {
        return 0.0;
    }
    -BOB_HEIGHT * cycle(elapsed, BOB_PERIOD)
}
