// game/celebration.rs

use bevy::math::Vec2;

use crate::config::CelebrationConfig;

/// One emission of confetti, in the spirit of a canvas-confetti call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    pub particle_count: u32,
    /// Launch direction in degrees, counter-clockwise from +x (screen up is 90)
    pub angle_deg: f32,
    pub spread_deg: f32,
    /// Fractional viewport position (0..1 on both axes, top-left origin)
    pub origin: Vec2,
    pub drift: f32,
    pub gravity: f32,
    pub scalar: f32,
}

impl BurstSpec {
    /// Stream from the left edge, aimed up and right
    pub const LEFT_STREAM: BurstSpec = BurstSpec {
        particle_count: 2,
        angle_deg: 60.0,
        spread_deg: 40.0,
        origin: Vec2::new(0.0, 0.7),
        drift: 0.2,
        gravity: 0.6,
        scalar: 1.1,
    };

    /// Mirror of the left stream
    pub const RIGHT_STREAM: BurstSpec = BurstSpec {
        particle_count: 2,
        angle_deg: 120.0,
        spread_deg: 40.0,
        origin: Vec2::new(1.0, 0.7),
        drift: -0.2,
        gravity: 0.6,
        scalar: 1.1,
    };

    /// Single big burst from the middle of the screen
    pub const CENTER_BURST: BurstSpec = BurstSpec {
        particle_count: 70,
        angle_deg: 90.0,
        spread_deg: 80.0,
        origin: Vec2::new(0.5, 0.5),
        drift: 0.0,
        gravity: 0.5,
        scalar: 1.3,
    };
}

/// Confetti sequence with its own "already running" guard.
///
/// One instance lives for the celebration screen; firing while a run is in
/// progress is ignored.
#[derive(Debug, Clone)]
pub struct CelebrationController {
    duration: f32,
    burst_delay: f32,
    running: bool,
    started_at: f32,
    burst_fired: bool,
    runs: u32,
}

impl CelebrationController {
    pub fn new(config: &CelebrationConfig) -> Self {
        Self {
            duration: config.duration_secs,
            burst_delay: config.burst_delay_secs,
            running: false,
            started_at: 0.0,
            burst_fired: false,
            runs: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed or in-progress runs
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Start a run; returns false if one is already going
    pub fn fire(&mut self, now: f32) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.started_at = now;
        self.burst_fired = false;
        self.runs += 1;
        log::debug!("celebration run {} started at {:.2}s", self.runs, now);
        true
    }

    /// Bursts to emit this frame
    pub fn tick(&mut self, now: f32) -> Vec<BurstSpec> {
        if !self.running {
            return Vec::new();
        }

        let mut bursts = vec![BurstSpec::LEFT_STREAM, BurstSpec::RIGHT_STREAM];

        if !self.burst_fired && now - self.started_at >= self.burst_delay {
            self.burst_fired = true;
            bursts.push(BurstSpec::CENTER_BURST);
        }

        // The frame that crosses the end still emits
        if now >= self.started_at + self.duration {
            self.running = false;
            log::debug!("celebration run {} finished", self.runs);
        }

        bursts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CelebrationController {
        CelebrationController::new(&CelebrationConfig::default())
    }

    #[test]
    fn test_idle_controller_emits_nothing() {
        let mut celebration = controller();
        assert!(celebration.tick(1.0).is_empty());
        assert!(!celebration.is_running());
    }

    #[test]
    fn test_fire_is_guarded_while_running() {
        let mut celebration = controller();

        assert!(celebration.fire(0.0));
        assert!(!celebration.fire(1.0));
        assert_eq!(celebration.runs(), 1);
    }

    #[test]
    fn test_streams_then_single_center_burst() {
        let mut celebration = controller();
        celebration.fire(10.0);

        let first = celebration.tick(10.0);
        assert_eq!(first, vec![BurstSpec::LEFT_STREAM, BurstSpec::RIGHT_STREAM]);

        let at_delay = celebration.tick(10.5);
        assert_eq!(at_delay.len(), 3);
        assert_eq!(at_delay[2], BurstSpec::CENTER_BURST);

        let later = celebration.tick(11.0);
        assert_eq!(later.len(), 2);
    }

    #[test]
    fn test_run_ends_after_duration() {
        let mut celebration = controller();
        celebration.fire(0.0);

        celebration.tick(3.9);
        assert!(celebration.is_running());

        // Last frame still emits the streams
        assert_eq!(celebration.tick(4.0).len(), 2);
        assert!(!celebration.is_running());
        assert!(celebration.tick(4.1).is_empty());
    }

    #[test]
    fn test_refire_after_finish_restarts_burst() {
        let mut celebration = controller();
        celebration.fire(0.0);
        celebration.tick(0.6);
        celebration.tick(4.0);

        assert!(celebration.fire(5.0));
        let bursts = celebration.tick(5.5);
        assert!(bursts.contains(&BurstSpec::CENTER_BURST));
        assert_eq!(celebration.runs(), 2);
    }
}
