use std::f32::consts::PI;

use bevy::math::Vec2;

use super::geometry::{AllowedRegion, DetectionGeometry, PointerSample, TargetRect, ViewportBounds};
use super::random::RandomSource;

/// Half-width of the angular jitter applied to the flee direction (radians)
const FLEE_JITTER: f32 = 0.4;

/// Where the renderer should draw the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPosition {
    /// Normal document-flow position
    Natural,
    /// Fixed top-left position in viewport space
    Fixed(Vec2),
}

/// How a relocation was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationStrategy {
    /// Jumped directly away from the pointer (possibly clamped)
    Flee,
    /// Clamping left it too close, so a random spot was picked
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relocation {
    /// New top-left corner
    pub position: Vec2,
    /// New center, using the measured size
    pub center: Vec2,
    pub strategy: RelocationStrategy,
}

/// Owned state of the evasive target.
///
/// `activated` and `evaded` only ever go from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetState {
    pub position: Option<Vec2>,
    pub evaded: bool,
    pub activated: bool,
}

/// Keeps one rectangular target away from the pointer once armed
pub struct EvasionController {
    geometry: DetectionGeometry,
    viewport: ViewportBounds,
    state: TargetState,
    rng: Box<dyn RandomSource + Send + Sync>,
}

impl EvasionController {
    pub fn new(
        geometry: DetectionGeometry,
        viewport: ViewportBounds,
        rng: impl RandomSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            geometry,
            viewport,
            state: TargetState::default(),
            rng: Box::new(rng),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.viewport = viewport;
    }

    pub fn allowed_region(&self) -> AllowedRegion {
        self.viewport
            .allowed_region(self.geometry.viewport_padding, self.geometry.footprint)
    }

    pub fn render_position(&self) -> RenderPosition {
        match self.state.position {
            Some(pos) if self.state.evaded => RenderPosition::Fixed(pos),
            _ => RenderPosition::Natural,
        }
    }

    /// Arm the controller and make the initial jump.
    ///
    /// Only the first call has any effect. Arming sticks even when the
    /// target has no geometry yet; the jump then waits for the next tick.
    pub fn arm(&mut self, pointer: PointerSample, rect: Option<TargetRect>) -> Option<Relocation> {
        if self.state.activated {
            return None;
        }
        self.state.activated = true;
        log::debug!("evasion armed at pointer ({:.1}, {:.1})", pointer.x, pointer.y);
        self.relocate(pointer, rect)
    }

    /// Relocate if the pointer is inside the detection radius
    pub fn on_proximity_tick(
        &mut self,
        pointer: PointerSample,
        rect: Option<TargetRect>,
    ) -> Option<Relocation> {
        if !self.state.activated {
            return None;
        }
        let rect = rect?;
        let distance = self.current_center(&rect).distance(pointer.as_vec2());
        if distance >= self.geometry.detection_radius {
            return None;
        }
        self.relocate(pointer, Some(rect))
    }

    /// Center of the target: last committed position if evaded, else layout position
    fn current_center(&self, rect: &TargetRect) -> Vec2 {
        match self.state.position {
            Some(pos) if self.state.evaded => pos + rect.half_size(),
            _ => rect.center(),
        }
    }

    fn relocate(&mut self, pointer: PointerSample, rect: Option<TargetRect>) -> Option<Relocation> {
        let Some(rect) = rect else {
            log::trace!("target not measured yet, relocation deferred");
            return None;
        };

        let half = rect.half_size();
        let center = self.current_center(&rect);
        let pointer = pointer.as_vec2();

        let to_pointer = pointer - center;
        let angle = to_pointer.y.atan2(to_pointer.x);
        let jitter = (self.rng.next_unit() - 0.5) * (2.0 * FLEE_JITTER);
        let flee_angle = angle + PI + jitter;

        let jump = Vec2::new(flee_angle.cos(), flee_angle.sin()) * self.geometry.jump_distance;
        let region = self.allowed_region();
        let mut position = region.clamp(center + jump - half);
        let mut strategy = RelocationStrategy::Flee;

        if (position + half).distance(pointer) < self.geometry.fallback_threshold() {
            let u = self.rng.next_unit();
            let v = self.rng.next_unit();
            position = region.lerp_point(u, v);
            strategy = RelocationStrategy::Fallback;
        }

        self.state.position = Some(position);
        self.state.evaded = true;

        log::debug!(
            "target relocated to ({:.1}, {:.1}) via {:?}",
            position.x,
            position.y,
            strategy
        );

        Some(Relocation {
            position,
            center: position + half,
            strategy,
        })
    }
}
