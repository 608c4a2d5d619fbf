// ============================================================================
// EASING FUNCTIONS for smooth animations
// ============================================================================

/// Ease-out cubic: fast at start, decelerates at end
/// Used for the celebration fade-in so the screen appears immediately
pub fn ease_out_cubic(t: f32) -> f32 {
    let x = 1.0 - t.clamp(0.0, 1.0);
    1.0 - x * x * x
}

/// Ease-in-out cubic: slow at start and end, fast in the middle
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Progress of an animation that started at `start` and lasts `duration` seconds
pub fn progress(now: f32, start: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - start) / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_clamps_out_of_range() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(1.0, 1.0, 2.0), 0.0);
        assert_eq!(progress(2.0, 1.0, 2.0), 0.5);
        assert_eq!(progress(9.0, 1.0, 2.0), 1.0);
        assert_eq!(progress(0.0, 1.0, 0.0), 1.0);
    }
}
