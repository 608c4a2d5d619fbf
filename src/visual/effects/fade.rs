use bevy::prelude::*;

use crate::visual::{
    setup::{FadeIn, HeartPulse},
    utils::{ease_in_out_cubic, ease_out_cubic, progress},
};

const HEARTBEAT_PERIOD: f32 = 1.2;
const HEARTBEAT_SWELL: f32 = 0.15;

fn faded_alpha(fade: &FadeIn, now: f32) -> f32 {
    fade.alpha * ease_out_cubic(progress(now, fade.start, fade.duration))
}

/// System: Fade celebration text and images in
pub fn fade_in(
    time: Res<Time>,
    mut texts: Query<(&FadeIn, &mut TextColor)>,
    mut images: Query<(&FadeIn, &mut ImageNode)>,
) {
    let now = time.elapsed_secs();

    for (fade, mut color) in &mut texts {
        let alpha = faded_alpha(fade, now);
        if (color.0.alpha() - alpha).abs() > f32::EPSILON {
            color.0.set_alpha(alpha);
        }
    }
    for (fade, mut image) in &mut images {
        let alpha = faded_alpha(fade, now);
        if (image.color.alpha() - alpha).abs() > f32::EPSILON {
            image.color.set_alpha(alpha);
        }
    }
}

/// Size scale at `t` seconds: swell then settle once per period
pub fn heartbeat_scale(t: f32) -> f32 {
    let phase = t.rem_euclid(HEARTBEAT_PERIOD) / HEARTBEAT_PERIOD;
    let swell = if phase < 0.5 {
        ease_in_out_cubic(phase * 2.0)
    } else {
        ease_in_out_cubic((1.0 - phase) * 2.0)
    };
    1.0 + HEARTBEAT_SWELL * swell
}

/// System: Beat the hearts
pub fn pulse_hearts(time: Res<Time>, mut hearts: Query<(&HeartPulse, &mut Node)>) {
    let scale = heartbeat_scale(time.elapsed_secs());
    for (heart, mut node) in &mut hearts {
        let edge = Val::Px(heart.base_size * scale);
        if node.width != edge || node.height != edge {
            node.width = edge;
            node.height = edge;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_rests_at_period_boundaries() {
        assert!((heartbeat_scale(0.0) - 1.0).abs() < 1e-6);
        assert!((heartbeat_scale(HEARTBEAT_PERIOD * 3.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_heartbeat_peaks_mid_period() {
        let peak = heartbeat_scale(HEARTBEAT_PERIOD * 0.5);
        assert!((peak - (1.0 + HEARTBEAT_SWELL)).abs() < 1e-5);
        for i in 0..100 {
            let scale = heartbeat_scale(i as f32 * 0.037);
            assert!((1.0..=1.0 + HEARTBEAT_SWELL + 1e-6).contains(&scale));
        }
    }

    #[test]
    fn test_fade_reaches_target_alpha() {
        let fade = FadeIn {
            start: 1.0,
            duration: 0.8,
            alpha: 0.7,
        };
        assert_eq!(faded_alpha(&fade, 0.5), 0.0);
        assert!(faded_alpha(&fade, 1.4) > 0.35);
        assert!((faded_alpha(&fade, 5.0) - 0.7).abs() < 1e-6);
    }
}
