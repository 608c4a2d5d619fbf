use bevy::math::Vec2;
use serde::Deserialize;

/// Last known pointer coordinates in logical viewport pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Current window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewportBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Region the target's top-left corner may occupy.
    ///
    /// The footprint is the configured button size, not the measured one.
    pub fn allowed_region(&self, padding: f32, footprint: Footprint) -> AllowedRegion {
        AllowedRegion {
            min_x: padding,
            max_x: self.width - padding - footprint.width,
            min_y: padding,
            max_y: self.height - padding - footprint.height,
        }
    }
}

/// Width/height pair used for the assumed target footprint
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: 140.0,
            height: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllowedRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl AllowedRegion {
    /// Clamp X and Y independently.
    ///
    /// Resolves to the max edge when the region is degenerate (min > max),
    /// so an oversized footprint never panics.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.min_x).min(self.max_x),
            p.y.max(self.min_y).min(self.max_y),
        )
    }

    /// Map two unit draws onto the region
    pub fn lerp_point(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(
            u * (self.max_x - self.min_x) + self.min_x,
            v * (self.max_y - self.min_y) + self.min_y,
        )
    }

    #[cfg(test)]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    #[cfg(test)]
    pub fn is_degenerate(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Measured on-screen rectangle of the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TargetRect {
    /// Build from a center point and size (how the UI layer reports nodes)
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            left: center.x - size.x * 0.5,
            top: center.y - size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left, self.top) + self.half_size()
    }
}

/// Fixed distances that drive the evasion behaviour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionGeometry {
    pub detection_radius: f32,
    pub jump_distance: f32,
    pub viewport_padding: f32,
    pub footprint: Footprint,
}

impl DetectionGeometry {
    /// Clamped results closer than this fall back to a random spot
    pub fn fallback_threshold(&self) -> f32 {
        self.detection_radius * 0.7
    }
}

impl Default for DetectionGeometry {
    fn default() -> Self {
        Self {
            detection_radius: 80.0,
            jump_distance: 200.0,
            viewport_padding: 20.0,
            footprint: Footprint::default(),
        }
    }
}
