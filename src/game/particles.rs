// game/particles.rs

use bevy::math::Vec2;

use crate::evade::{RandomSource, ViewportBounds};

use super::celebration::BurstSpec;

/// Monochrome palette: ivory through charcoal
pub const PALETTE: [[u8; 3]; 6] = [
    [0xf4, 0xf1, 0xe8],
    [0xe8, 0xe0, 0xd5],
    [0xd4, 0xc5, 0xb2],
    [0x8b, 0x73, 0x55],
    [0x4a, 0x4a, 0x4a],
    [0x1a, 0x1a, 0x1a],
];

/// Launch speed in pixels per 60Hz tick
const START_VELOCITY: f32 = 45.0;
/// Velocity kept per tick
const DECAY: f32 = 0.9;
const LIFETIME_TICKS: f32 = 200.0;
/// Gravity is applied as a constant per-tick fall, scaled like canvas-confetti
const GRAVITY_SCALE: f32 = 3.0;
const BASE_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Heart,
    Circle,
}

/// One confetti piece in logical screen pixels (y down)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub drift: f32,
    pub gravity: f32,
    pub size: f32,
    pub color: [u8; 3],
    pub shape: ParticleShape,
    age_ticks: f32,
}

impl Particle {
    pub fn spawn(spec: &BurstSpec, viewport: ViewportBounds, rng: &mut dyn RandomSource) -> Self {
        let angle = (spec.angle_deg + (rng.next_unit() - 0.5) * spec.spread_deg).to_radians();
        let speed = START_VELOCITY * (0.5 + rng.next_unit() * 0.5);
        let color_index = ((rng.next_unit() * PALETTE.len() as f32) as usize).min(PALETTE.len() - 1);
        let shape = if rng.next_unit() < 0.5 {
            ParticleShape::Heart
        } else {
            ParticleShape::Circle
        };

        Particle {
            position: Vec2::new(spec.origin.x * viewport.width, spec.origin.y * viewport.height),
            // Screen space: up is -y
            velocity: Vec2::new(angle.cos(), -angle.sin()) * speed,
            drift: spec.drift,
            gravity: spec.gravity * GRAVITY_SCALE,
            size: BASE_SIZE * spec.scalar,
            color: PALETTE[color_index],
            shape,
            age_ticks: 0.0,
        }
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        let ticks = dt * 60.0;
        self.position += (self.velocity + Vec2::new(self.drift, self.gravity)) * ticks;
        self.velocity *= DECAY.powf(ticks);
        self.age_ticks += ticks;
    }

    pub fn is_expired(&self) -> bool {
        self.age_ticks >= LIFETIME_TICKS
    }

    /// Linear fade over the whole lifetime
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age_ticks / LIFETIME_TICKS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evade::{SeededRandom, sequence};

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_at_burst_origin() {
        let mut rng = sequence(vec![0.5, 1.0, 0.0, 0.9]);
        let particle = Particle::spawn(&BurstSpec::LEFT_STREAM, viewport(), &mut rng);

        assert!((particle.position - Vec2::new(0.0, 420.0)).length() < 1e-3);
        assert_eq!(particle.color, PALETTE[0]);
        assert_eq!(particle.shape, ParticleShape::Circle);

        // 60 degrees, full speed: up and to the right
        let expected = Vec2::new(60f32.to_radians().cos(), -60f32.to_radians().sin()) * 45.0;
        assert!((particle.velocity - expected).length() < 1e-3);
    }

    #[test]
    fn test_launch_angle_stays_within_spread() {
        let mut rng = SeededRandom::from_seed(9);
        for _ in 0..200 {
            let particle = Particle::spawn(&BurstSpec::CENTER_BURST, viewport(), &mut rng);
            let angle = (-particle.velocity.y).atan2(particle.velocity.x).to_degrees();
            assert!((49.9..=130.1).contains(&angle), "angle {}", angle);
        }
    }

    #[test]
    fn test_step_decays_and_falls() {
        let mut rng = sequence(vec![0.5, 1.0, 0.0, 0.0]);
        let mut particle = Particle::spawn(&BurstSpec::CENTER_BURST, viewport(), &mut rng);
        let start_speed = particle.velocity.length();

        particle.step(1.0 / 60.0);
        assert!((particle.velocity.length() - start_speed * 0.9).abs() < 1e-3);

        // Long after launch the constant gravity term wins
        for _ in 0..120 {
            particle.step(1.0 / 60.0);
        }
        let before = particle.position.y;
        particle.step(1.0 / 60.0);
        assert!(particle.position.y > before);
    }

    #[test]
    fn test_particle_expires_after_lifetime() {
        let mut rng = sequence(vec![0.5]);
        let mut particle = Particle::spawn(&BurstSpec::RIGHT_STREAM, viewport(), &mut rng);
        assert_eq!(particle.opacity(), 1.0);

        particle.step(100.0 / 60.0);
        assert!(!particle.is_expired());
        assert!((particle.opacity() - 0.5).abs() < 1e-3);

        particle.step(101.0 / 60.0);
        assert!(particle.is_expired());
        assert_eq!(particle.opacity(), 0.0);
    }
}
